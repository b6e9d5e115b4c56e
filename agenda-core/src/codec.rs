//! Line encoding shared by the live command path and the journal file.
//!
//! A line is `<date> <description>`. Decoding splits on whitespace, parses the
//! first token as a date and rebuilds the description from the remaining
//! tokens, exactly as an `Add` command does. Saving a description and reading
//! it back therefore yields the same bytes.

use crate::date::{CalendarDate, parse_date};
use crate::error::AgendaResult;
use crate::index::EventIndex;

/// How multi-word descriptions are rebuilt from their tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptionJoin {
    /// Tokens joined by single spaces with one trailing space when there is
    /// more than one token (`Dinner with Bob` becomes `"Dinner with Bob "`).
    #[default]
    Legacy,
    /// Tokens joined by single spaces, nothing appended.
    Trimmed,
}

/// Rebuild a description from whitespace-separated tokens.
pub fn join_description<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    join: DescriptionJoin,
) -> String {
    let mut tokens = tokens.into_iter();
    let Some(first) = tokens.next() else {
        return String::new();
    };

    let mut description = first.to_string();
    let mut multi_word = false;
    for token in tokens {
        description.push(' ');
        description.push_str(token);
        multi_word = true;
    }

    if multi_word && join == DescriptionJoin::Legacy {
        description.push(' ');
    }
    description
}

/// Split `<date> <description...>` into a parsed date and a description.
pub fn parse_entry(text: &str, join: DescriptionJoin) -> AgendaResult<(CalendarDate, String)> {
    let mut tokens = text.split_whitespace();
    let date = parse_date(tokens.next().unwrap_or_default())?;
    Ok((date, join_description(tokens, join)))
}

/// Encode a single pair as a journal line (without the newline).
///
/// Decoding rebuilds the description from whitespace-separated tokens, so a
/// description containing a newline or a run of whitespace does not survive a
/// save and read. Descriptions built by [`parse_entry`] always do.
pub fn encode_line(date: &CalendarDate, description: &str) -> String {
    format!("{date} {description}")
}

/// Lazily encode every pair of `index` in enumeration order.
pub fn serialize(index: &EventIndex) -> impl Iterator<Item = String> + '_ {
    index
        .enumerate()
        .map(|(date, description)| encode_line(&date, description))
}

/// Decode `line` and insert it into `index`.
///
/// Returns whether the event was new to the index.
pub fn deserialize(index: &mut EventIndex, line: &str, join: DescriptionJoin) -> AgendaResult<bool> {
    let (date, description) = parse_entry(line, join)?;
    Ok(index.add_event(date, description))
}
