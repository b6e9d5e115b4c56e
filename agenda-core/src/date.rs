//! Calendar date value type and its textual parser.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{AgendaError, AgendaResult};

/// A validated (year, month, day) triple.
///
/// Month is always within 1..=12 and day within 1..=31. The day is not checked
/// against the length of the month, so `2022-02-30` is a valid value.
///
/// Ordering compares year, then month, then day as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: i32, day: i32) -> AgendaResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AgendaError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(AgendaError::InvalidDay(day));
        }

        Ok(CalendarDate {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Chronological comparison, same as `Ord::cmp`.
    pub fn compare(&self, other: &CalendarDate) -> Ordering {
        self.cmp(other)
    }
}

/// Renders `YYYY-MM-DD`. Years wider than four digits are never truncated and
/// negative years keep their sign in front of the padding (`-005-01-01`).
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

/// Parse a `<int>-<int>-<int>` token into a date.
///
/// Each field is an optional sign followed by decimal digits. The whole token
/// must be consumed; anything else is reported as [`AgendaError::MalformedDate`].
pub fn parse_date(token: &str) -> AgendaResult<CalendarDate> {
    let malformed = || AgendaError::MalformedDate(token.to_string());

    let (year, rest) = take_int(token).ok_or_else(malformed)?;
    let rest = rest.strip_prefix('-').ok_or_else(malformed)?;
    let (month, rest) = take_int(rest).ok_or_else(malformed)?;
    let rest = rest.strip_prefix('-').ok_or_else(malformed)?;
    let (day, rest) = take_int(rest).ok_or_else(malformed)?;

    if !rest.is_empty() {
        return Err(malformed());
    }

    CalendarDate::new(year, month, day)
}

/// Split a leading signed integer off `s`, returning it and the remainder.
fn take_int(s: &str) -> Option<(i32, &str)> {
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return None;
    }

    let end = sign_len + digits;
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
