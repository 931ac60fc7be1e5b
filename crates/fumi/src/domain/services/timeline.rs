//! Timeline - Delayed steps ordered by deadline
//!
//! Entries with equal deadlines come out in the order they were scheduled.
//! Nothing is ever cancelled.

use std::collections::BTreeMap;
use std::time::Instant;

/// Deadline-ordered queue of pending steps
#[derive(Debug)]
pub struct Timeline<T> {
    entries: BTreeMap<(Instant, u64), T>,
    next_seq: u64,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `item` to become due at `deadline`
    pub fn schedule(&mut self, deadline: Instant, item: T) {
        self.entries.insert((deadline, self.next_seq), item);
        self.next_seq += 1;
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return every item due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let later = self.entries.split_off(&(now, u64::MAX));
        std::mem::replace(&mut self.entries, later)
            .into_values()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_drains_in_deadline_order() {
        let start = Instant::now();
        let mut timeline = Timeline::new();
        timeline.schedule(start + Duration::from_millis(1000), "read");
        timeline.schedule(start + Duration::from_millis(300), "open");

        assert_eq!(timeline.next_deadline(), Some(start + Duration::from_millis(300)));
        assert_eq!(timeline.drain_due(start + Duration::from_millis(1000)), vec!["open", "read"]);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_only_due_items_are_drained() {
        let start = Instant::now();
        let mut timeline = Timeline::new();
        timeline.schedule(start + Duration::from_millis(300), 1);
        timeline.schedule(start + Duration::from_millis(900), 2);

        assert!(timeline.drain_due(start + Duration::from_millis(299)).is_empty());
        assert_eq!(timeline.drain_due(start + Duration::from_millis(300)), vec![1]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.next_deadline(), Some(start + Duration::from_millis(900)));
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let at = Instant::now();
        let mut timeline = Timeline::new();
        timeline.schedule(at, 'a');
        timeline.schedule(at, 'b');
        timeline.schedule(at, 'c');

        assert_eq!(timeline.drain_due(at), vec!['a', 'b', 'c']);
    }
}
