use tracing::debug;

use crate::{error::ActionError, storage::entities::LogEntry, utils::clock::Clock};

use super::id::generate_id;

/// Entries kept newest first. Nothing enforces ordering of timestamps, only of insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Records a tap on the trimmed `category` at the clock's current moment and places it in
    /// front. Blank categories are rejected.
    pub fn add(&mut self, category: &str, clock: &dyn Clock) -> Result<LogEntry, ActionError> {
        self.add_with_ids(category, clock, generate_id)
    }

    fn add_with_ids(
        &mut self,
        category: &str,
        clock: &dyn Clock,
        mut ids: impl FnMut() -> String,
    ) -> Result<LogEntry, ActionError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ActionError::EmptyInput);
        }
        let mut id = ids();
        while self.entries.iter().any(|v| v.id == id) {
            debug!("Regenerating colliding id {id}");
            id = ids();
        }
        let entry = LogEntry::new(id, clock.millis(), category);
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    /// Removes the entry with `id`. Returns whether something was removed; a missing id is not an
    /// error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|v| v.id != id);
        self.entries.len() != before
    }

    /// Entries in stored order, newest first.
    pub fn list(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn recent(&self, limit: usize) -> &[LogEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{error::ActionError, storage::entities::LogEntry, utils::clock::FixedClock};

    use super::LogStore;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 3, 7, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_add_prepends() {
        let mut store = LogStore::default();
        let first = store.add("A", &clock()).unwrap();
        let second = store.add("B", &clock()).unwrap();

        assert_eq!(store.list(), &[second.clone(), first.clone()]);
        assert_eq!(first.timestamp, clock().0.timestamp_millis());
        assert_eq!(first.category, "A");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_regenerates_colliding_ids() {
        let mut store = LogStore::new(vec![LogEntry::new("same", 1, "A")]);
        let mut ids = ["same", "same", "fresh"].into_iter().map(String::from);
        let entry = store
            .add_with_ids("B", &clock(), || ids.next().unwrap())
            .unwrap();
        assert_eq!(entry.id, "fresh");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_trims_category() {
        let mut store = LogStore::default();
        let entry = store.add("  运动\t", &clock()).unwrap();
        assert_eq!(entry.category, "运动");
        assert_eq!(store.list()[0].category, "运动");
    }

    #[test]
    fn test_add_rejects_blank_category() {
        let mut store = LogStore::new(vec![LogEntry::new("a", 1, "A")]);
        let before = store.clone();
        assert_eq!(store.add("", &clock()), Err(ActionError::EmptyInput));
        assert_eq!(store.add(" \t ", &clock()), Err(ActionError::EmptyInput));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = LogStore::new(vec![LogEntry::new("a", 1, "A"), LogEntry::new("b", 2, "B")]);
        let before = store.clone();
        assert!(!store.remove("missing"));
        assert_eq!(store, before);

        assert!(store.remove("a"));
        assert_eq!(store.list(), &[LogEntry::new("b", 2, "B")]);
        assert!(!store.remove("a"));
    }

    #[test]
    fn test_recent_limits() {
        let mut store = LogStore::default();
        for i in 0..40 {
            store.add(&format!("c{i}"), &clock()).unwrap();
        }
        let recent = store.recent(30);
        assert_eq!(recent.len(), 30);
        assert_eq!(recent[0].category, "c39");
        assert_eq!(store.recent(100).len(), 40);
        assert!(LogStore::default().recent(30).is_empty());
    }
}
