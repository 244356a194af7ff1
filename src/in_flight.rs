//! In-Flight Request Tracking
//!
//! Submissions (login, logging food, saving plans...) allow one outstanding
//! request per action. Queries (recommendations, favorites) instead let the
//! newest request win and discard answers to older ones.

use std::collections::{HashMap, HashSet};

use crate::api::Action;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlightSet {
    active: HashSet<Action>,
    tickets: HashMap<Action, u64>,
}

impl InFlightSet {
    /// Returns false if `action` is already running
    pub fn try_begin(&mut self, action: Action) -> bool {
        self.active.insert(action)
    }

    pub fn finish(&mut self, action: Action) {
        self.active.remove(&action);
    }

    /// New ticket for a query; older tickets of the same action go stale
    pub fn issue(&mut self, action: Action) -> u64 {
        let ticket = self.tickets.entry(action).or_insert(0);
        *ticket += 1;
        *ticket
    }

    pub fn is_current(&self, action: Action, ticket: u64) -> bool {
        self.tickets.get(&action) == Some(&ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_submission_rejected_until_finished() {
        let mut set = InFlightSet::default();
        assert!(set.try_begin(Action::Login));
        assert!(!set.try_begin(Action::Login));
        assert!(set.try_begin(Action::LogFood));

        set.finish(Action::Login);
        assert!(set.try_begin(Action::Login));
    }

    #[test]
    fn test_newer_query_supersedes_older() {
        let mut set = InFlightSet::default();
        let first = set.issue(Action::Recommend);
        let second = set.issue(Action::Recommend);
        let favorites = set.issue(Action::LoadFavorites);

        assert!(!set.is_current(Action::Recommend, first));
        assert!(set.is_current(Action::Recommend, second));
        assert!(set.is_current(Action::LoadFavorites, favorites));
    }
}
