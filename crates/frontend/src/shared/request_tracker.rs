//! Latest-request-wins bookkeeping for concurrent fetches.
//!
//! Every fetch for a logical slot (e.g. "sales trends") takes a token when it
//! starts. When the response arrives it is applied only if its token is still
//! the newest one issued for that slot; older responses that resolve late are
//! dropped instead of overwriting fresher data.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Ticket handed out when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken<S> {
    pub slot: S,
    pub seq: u64,
}

#[derive(Debug, Clone)]
pub struct RequestTracker<S> {
    next_seq: u64,
    latest: HashMap<S, u64>,
}

impl<S> Default for RequestTracker<S> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            latest: HashMap::new(),
        }
    }
}

impl<S: Copy + Eq + Hash> RequestTracker<S> {
    /// Issue a new token for `slot`, superseding any earlier one
    pub fn issue(&mut self, slot: S) -> RequestToken<S> {
        self.next_seq += 1;
        self.latest.insert(slot, self.next_seq);
        RequestToken {
            slot,
            seq: self.next_seq,
        }
    }

    pub fn is_latest(&self, token: &RequestToken<S>) -> bool {
        self.latest.get(&token.slot) == Some(&token.seq)
    }
}

/// Per-slot loading flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingFlags<S: Eq + Hash>(HashSet<S>);

impl<S: Eq + Hash> Default for LoadingFlags<S> {
    fn default() -> Self {
        Self(HashSet::new())
    }
}

impl<S: Copy + Eq + Hash> LoadingFlags<S> {
    pub fn set(&mut self, slot: S, loading: bool) {
        if loading {
            self.0.insert(slot);
        } else {
            self.0.remove(&slot);
        }
    }

    pub fn is_loading(&self, slot: S) -> bool {
        self.0.contains(&slot)
    }

    pub fn any(&self, slots: &[S]) -> bool {
        slots.iter().any(|s| self.0.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Slot {
        Trends,
        Summary,
    }

    #[test]
    fn test_newer_token_supersedes_older() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue(Slot::Trends);
        let second = tracker.issue(Slot::Trends);
        assert!(!tracker.is_latest(&first));
        assert!(tracker.is_latest(&second));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut tracker = RequestTracker::default();
        let trends = tracker.issue(Slot::Trends);
        let summary = tracker.issue(Slot::Summary);
        assert!(tracker.is_latest(&trends));
        assert!(tracker.is_latest(&summary));
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let mut tracker = RequestTracker::default();
        let a = tracker.issue(Slot::Summary);
        let b = tracker.issue(Slot::Trends);
        let c = tracker.issue(Slot::Summary);
        assert!(a.seq < b.seq && b.seq < c.seq);
    }

    #[test]
    fn test_unknown_token_is_not_latest() {
        let tracker: RequestTracker<Slot> = RequestTracker::default();
        assert!(!tracker.is_latest(&RequestToken {
            slot: Slot::Trends,
            seq: 1
        }));
    }

    #[test]
    fn test_loading_flags() {
        let mut flags = LoadingFlags::default();
        flags.set(Slot::Trends, true);
        assert!(flags.is_loading(Slot::Trends));
        assert!(flags.any(&[Slot::Summary, Slot::Trends]));
        flags.set(Slot::Trends, false);
        assert!(!flags.any(&[Slot::Summary, Slot::Trends]));
    }
}
