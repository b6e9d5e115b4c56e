//! Core types for the agenda event store.
//!
//! - `date`: the validated [`CalendarDate`] value and its parser
//! - `index`: the date-keyed [`EventIndex`]
//! - `codec`: the `<date> <description>` line format
//! - `journal`: append/read/truncate of the flat file

pub mod codec;
pub mod date;
pub mod error;
pub mod index;
pub mod journal;

pub use codec::DescriptionJoin;
pub use date::{CalendarDate, parse_date};
pub use error::{AgendaError, AgendaResult};
pub use index::EventIndex;
pub use journal::Journal;
