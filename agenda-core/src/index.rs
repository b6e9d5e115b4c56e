//! In-memory event index keyed by date.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::date::CalendarDate;

/// Date-keyed store of deduplicated event descriptions.
///
/// Every date present in the index has at least one event. Descriptions are
/// compared by exact string value, so `"Lunch"` and `"Lunch "` are distinct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventIndex {
    events: BTreeMap<CalendarDate, BTreeSet<String>>,
}

impl EventIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `description` under `date`.
    ///
    /// Returns false if the pair was already present, in which case the index
    /// is unchanged. See [`crate::codec::encode_line`] for descriptions that
    /// cannot be saved and read back unchanged.
    pub fn add_event(&mut self, date: CalendarDate, description: impl Into<String>) -> bool {
        self.events.entry(date).or_default().insert(description.into())
    }

    /// Remove a single event. Returns true if the pair existed.
    pub fn delete_event(&mut self, date: &CalendarDate, description: &str) -> bool {
        let Some(set) = self.events.get_mut(date) else {
            return false;
        };

        if !set.remove(description) {
            return false;
        }

        if set.is_empty() {
            self.events.remove(date);
        }
        true
    }

    /// Remove every event on `date`, returning how many were removed.
    pub fn delete_date(&mut self, date: &CalendarDate) -> usize {
        let removed = self.events.remove(date).map_or(0, |set| set.len());
        if removed > 0 {
            debug!(%date, removed, "deleted date");
        }
        removed
    }

    pub fn delete_all(&mut self) {
        debug!(dates = self.events.len(), "clearing index");
        self.events.clear();
    }

    /// Snapshot of the descriptions on `date`, empty if there are none.
    pub fn find(&self, date: &CalendarDate) -> BTreeSet<String> {
        self.events.get(date).cloned().unwrap_or_default()
    }

    /// Iterate over every `(date, description)` pair, ordered by date and then
    /// by description.
    pub fn enumerate(&self) -> impl Iterator<Item = (CalendarDate, &str)> + '_ {
        self.events
            .iter()
            .flat_map(|(date, set)| set.iter().map(move |desc| (*date, desc.as_str())))
    }

    /// Total number of events across all dates.
    pub fn len(&self) -> usize {
        self.events.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn date_count(&self) -> usize {
        self.events.len()
    }
}
