//! The read-eval-print loop over command lines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use agenda_core::{AgendaError, DescriptionJoin, EventIndex, Journal};

use crate::commands::{Command, USAGE};

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Owns the live index and the journal it persists to.
pub struct Session {
    index: EventIndex,
    journal: Journal,
    join: DescriptionJoin,
}

impl Session {
    pub fn new(journal: Journal, join: DescriptionJoin) -> Self {
        Session {
            index: EventIndex::new(),
            journal: journal.with_join(join),
            join,
        }
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    /// Process lines from `input` until `End` or end of input.
    ///
    /// A failing command, including a line that is not UTF-8, prints its
    /// message and the loop carries on. Only failures to read input or write
    /// output end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        info!(journal = %self.journal.path().display(), "session started");

        for (n, raw) in input.split(b'\n').enumerate() {
            let raw = raw.with_context(|| format!("Failed to read command line {}", n + 1))?;

            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(_) => {
                    warn!(line = n + 1, "command is not valid UTF-8");
                    writeln!(out, "{}", AgendaError::InvalidUtf8)?;
                    continue;
                }
            };

            let command = match Command::parse(&line, self.join) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!(line = n + 1, "rejected command: {e}");
                    writeln!(out, "{e}")?;
                    continue;
                }
            };

            if self.execute(command, out)? == Flow::Stop {
                break;
            }
        }

        out.flush()?;
        info!(events = self.index.len(), "session finished");
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Add { date, description } => {
                self.index.add_event(date, description);
            }
            Command::DeleteEvent { date, description } => {
                if self.index.delete_event(&date, &description) {
                    writeln!(out, "Deleted successfully")?;
                } else {
                    writeln!(out, "Event not found")?;
                }
            }
            Command::DeleteDate(date) => {
                let count = self.index.delete_date(&date);
                writeln!(out, "Deleted {count} events")?;
            }
            Command::Find(date) => {
                for event in self.index.find(&date) {
                    writeln!(out, "{event}")?;
                }
            }
            Command::Print => {
                if self.index.is_empty() {
                    writeln!(out, "No events")?;
                }
                for (date, event) in self.index.enumerate() {
                    writeln!(out, "{date} {event}")?;
                }
            }
            Command::Save => match self.journal.save(&self.index) {
                Ok(count) => writeln!(out, "Saved {count} events")?,
                Err(e) => {
                    warn!("save failed: {e}");
                    writeln!(out, "{e}")?;
                }
            },
            Command::Read => match self.journal.read_into(&mut self.index) {
                Ok(count) => writeln!(out, "Read {count} events")?,
                Err(e) => {
                    warn!("read failed: {e}");
                    writeln!(out, "{e}")?;
                }
            },
            Command::Clear => match self.journal.clear() {
                Ok(()) => writeln!(out, "Cleared")?,
                Err(e) => {
                    warn!("clear failed: {e}");
                    writeln!(out, "{e}")?;
                }
            },
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::End => {
                write!(out, "Goodbye!")?;
                return Ok(Flow::Stop);
            }
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn session_in(tmp: &TempDir) -> Session {
        Session::new(Journal::new(tmp.path().join("events.db")), DescriptionJoin::Legacy)
    }

    #[test]
    fn test_add_find_print_and_delete() {
        let tmp = TempDir::new().unwrap();
        let mut session = session_in(&tmp);

        let out = run_script(
            &mut session,
            "Add 0-1-2 event1\n\
             Add 0-1-3 event2\n\
             Add 0-1-3 event2\n\
             Print\n\
             Find 0-1-3\n\
             Del 0-1-3 event2\n\
             Del 0-1-3 event2\n\
             Del 0-1-2\n\
             Del 0-1-2\n\
             Print\n",
        );

        assert_eq!(
            out,
            "0000-01-02 event1\n\
             0000-01-03 event2\n\
             event2\n\
             Deleted successfully\n\
             Event not found\n\
             Deleted 1 events\n\
             Deleted 0 events\n\
             No events\n"
        );
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let tmp = TempDir::new().unwrap();
        let mut session = session_in(&tmp);

        let out = run_script(
            &mut session,
            "Add 2022-13-01 x\n\
             Add 2022-01-32 x\n\
             Add 2022/02/01 x\n\
             Frobnicate\n\
             \n\
             Add 2022-02-30 Leap\n\
             Find 2022-02-30\n",
        );

        assert_eq!(
            out,
            "Month value is invalid: 13\n\
             Day value is invalid: 32\n\
             Wrong date format: 2022/02/01\n\
             Unknown command: Frobnicate\n\
             Leap\n"
        );
    }

    #[test]
    fn test_non_utf8_line_does_not_end_session() {
        let tmp = TempDir::new().unwrap();
        let mut session = session_in(&tmp);

        let mut out = Vec::new();
        session
            .run(
                Cursor::new(&b"Add 2021-05-01 Caf\xE9\nAdd 2021-05-02 Next\nPrint\n"[..]),
                &mut out,
            )
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Line is not valid UTF-8\n\
             2021-05-02 Next\n"
        );
        assert_eq!(session.index().len(), 1);
    }

    #[test]
    fn test_end_stops_reading() {
        let tmp = TempDir::new().unwrap();
        let mut session = session_in(&tmp);

        let out = run_script(&mut session, "Add 2021-05-01 Meeting\nEnd\nAdd 2021-05-02 Ignored\n");

        assert_eq!(out, "Goodbye!");
        assert_eq!(session.index().len(), 1);
    }

    #[test]
    fn test_save_read_clear() {
        let tmp = TempDir::new().unwrap();
        let mut first = session_in(&tmp);
        let out = run_script(&mut first, "Add 2022-03-10 Dentist\nAdd 2022-03-10 Dinner with Bob\nSave\n");
        assert_eq!(out, "Saved 2 events\n");

        let mut second = session_in(&tmp);
        let out = run_script(
            &mut second,
            "Read\n\
             Read\n\
             Find 2022-03-10\n\
             Del 2022-03-10 Dinner with Bob\n\
             Clear\n\
             Read\n\
             Print\n",
        );

        assert_eq!(
            out,
            "Read 2 events\n\
             Read 2 events\n\
             Dentist\n\
             Dinner with Bob \n\
             Deleted successfully\n\
             Cleared\n\
             Read 0 events\n\
             2022-03-10 Dentist\n"
        );
    }

    #[test]
    fn test_read_without_file_reports_and_continues() {
        let tmp = TempDir::new().unwrap();
        let mut session = session_in(&tmp);

        let out = run_script(&mut session, "Read\nAdd 2021-05-01 Meeting\nPrint\n");

        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("Could not open "));
        assert_eq!(lines.next(), Some("2021-05-01 Meeting"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_help_prints_usage() {
        let tmp = TempDir::new().unwrap();
        let mut session = session_in(&tmp);
        let out = run_script(&mut session, "Help\n");
        assert_eq!(out, format!("{USAGE}\n"));
    }
}
