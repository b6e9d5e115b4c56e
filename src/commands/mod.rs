//! Command-line keywords and their arguments.

use anyhow::Result;

use agenda_core::codec;
use agenda_core::{CalendarDate, DescriptionJoin, parse_date};

/// Usage text shown at startup and by `Help`.
pub const USAGE: &str = "\
Please, enter a command: Add, Del, Find, Print, Save, Read, Clear, Help, End
For example:
Add 0000-01-01 Event
Del 0000-01-01 or Del 0000-01-01 Event
Find 0000-01-01
Save, Read or Clear to append to, load from or truncate the database file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        date: CalendarDate,
        description: String,
    },
    DeleteEvent {
        date: CalendarDate,
        description: String,
    },
    DeleteDate(CalendarDate),
    Find(CalendarDate),
    Print,
    Save,
    Read,
    Clear,
    Help,
    End,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Descriptions are rebuilt with `join`, the same way the journal rebuilds
    /// them on `Read`, so `Del` matches what `Add` stored.
    pub fn parse(line: &str, join: DescriptionJoin) -> Result<Option<Command>> {
        let line = line.trim_start();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        let command = match keyword {
            "" => return Ok(None),
            "Add" => {
                let (date, description) = codec::parse_entry(rest, join)?;
                Command::Add { date, description }
            }
            "Del" => {
                let (date, description) = codec::parse_entry(rest, join)?;
                if rest.split_whitespace().nth(1).is_some() {
                    Command::DeleteEvent { date, description }
                } else {
                    Command::DeleteDate(date)
                }
            }
            "Find" => {
                let token = rest.split_whitespace().next().unwrap_or_default();
                Command::Find(parse_date(token)?)
            }
            "Print" => Command::Print,
            "Save" => Command::Save,
            "Read" => Command::Read,
            "Clear" => Command::Clear,
            "Help" => Command::Help,
            "End" => Command::End,
            other => anyhow::bail!("Unknown command: {}", other),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<Command>> {
        Command::parse(line, DescriptionJoin::Legacy)
    }

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_add_single_word() {
        assert_eq!(
            parse("Add 2021-05-01 Meeting").unwrap(),
            Some(Command::Add {
                date: date("2021-05-01"),
                description: "Meeting".to_string(),
            })
        );
    }

    #[test]
    fn test_add_multi_word_keeps_legacy_spacing() {
        assert_eq!(
            parse("Add 2021-05-01 Dinner   with Bob").unwrap(),
            Some(Command::Add {
                date: date("2021-05-01"),
                description: "Dinner with Bob ".to_string(),
            })
        );
    }

    #[test]
    fn test_add_multi_word_trimmed() {
        assert_eq!(
            Command::parse("Add 2021-05-01 Dinner with Bob", DescriptionJoin::Trimmed).unwrap(),
            Some(Command::Add {
                date: date("2021-05-01"),
                description: "Dinner with Bob".to_string(),
            })
        );
    }

    #[test]
    fn test_del_date_or_event() {
        assert_eq!(
            parse("Del 2021-05-01").unwrap(),
            Some(Command::DeleteDate(date("2021-05-01")))
        );
        assert_eq!(
            parse("Del 2021-05-01   ").unwrap(),
            Some(Command::DeleteDate(date("2021-05-01")))
        );
        assert_eq!(
            parse("Del 2021-05-01 Meeting").unwrap(),
            Some(Command::DeleteEvent {
                date: date("2021-05-01"),
                description: "Meeting".to_string(),
            })
        );
    }

    #[test]
    fn test_find_ignores_extra_tokens() {
        assert_eq!(
            parse("Find 2021-05-01 whatever").unwrap(),
            Some(Command::Find(date("2021-05-01")))
        );
    }

    #[test]
    fn test_bare_keywords() {
        assert_eq!(parse("Print").unwrap(), Some(Command::Print));
        assert_eq!(parse("  Save").unwrap(), Some(Command::Save));
        assert_eq!(parse("Read").unwrap(), Some(Command::Read));
        assert_eq!(parse("Clear").unwrap(), Some(Command::Clear));
        assert_eq!(parse("Help").unwrap(), Some(Command::Help));
        assert_eq!(parse("End").unwrap(), Some(Command::End));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("Remove 2021-05-01").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: Remove");
        assert_eq!(parse("add 2021-05-01 x").unwrap_err().to_string(), "Unknown command: add");
    }

    #[test]
    fn test_date_errors_surface_core_messages() {
        assert_eq!(
            parse("Add 2022-13-01 Event").unwrap_err().to_string(),
            "Month value is invalid: 13"
        );
        assert_eq!(
            parse("Find 2022/02/01").unwrap_err().to_string(),
            "Wrong date format: 2022/02/01"
        );
        assert_eq!(parse("Find").unwrap_err().to_string(), "Wrong date format: ");
    }
}
