//! # Roster
//!
//! Tracks which users are permanently ignored and which are temporarily
//! absent. Everyone else in the room is implicitly active. A user ID is
//! never in both sets at once. These sets outlive any single session.

use crate::domain::types::StandupError;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone)]
pub struct Roster {
    ignored: BTreeSet<String>,
    absent: BTreeSet<String>,
}

impl Roster {
    /// Builds a roster with the permanently-ignored set seeded from config.
    pub fn new(ignored: impl IntoIterator<Item = String>) -> Self {
        Self {
            ignored: ignored.into_iter().collect(),
            absent: BTreeSet::new(),
        }
    }

    pub fn is_ignored(&self, user: &str) -> bool {
        self.ignored.contains(user)
    }

    pub fn is_absent(&self, user: &str) -> bool {
        self.absent.contains(user)
    }

    /// Filters a freshly-resolved member list down to active-eligible users.
    pub fn eligible(&self, members: Vec<String>) -> Vec<String> {
        members
            .into_iter()
            .filter(|m| !self.is_ignored(m) && !self.is_absent(m))
            .collect()
    }

    /// Marks `user` temporarily absent.
    ///
    /// `active` is the eligible-user universe, re-resolved by the caller
    /// immediately before this call. A user recognized by none of the
    /// three classifications is unknown.
    pub fn mark_absent(&mut self, user: &str, active: &[String]) -> Result<(), StandupError> {
        if !active.iter().any(|u| u == user) && !self.is_ignored(user) && !self.is_absent(user) {
            return Err(StandupError::UnknownUser(user.to_string()));
        }
        if self.is_ignored(user) || self.is_absent(user) {
            return Err(StandupError::AlreadyExcluded(user.to_string()));
        }
        self.absent.insert(user.to_string());
        Ok(())
    }

    /// Returns `user` to eligibility, effective at the next queue build.
    pub fn mark_heeded(&mut self, user: &str, active: &[String]) -> Result<(), StandupError> {
        if !active.iter().any(|u| u == user) && !self.is_ignored(user) && !self.is_absent(user) {
            return Err(StandupError::UnknownUser(user.to_string()));
        }
        if self.is_ignored(user) {
            return Err(StandupError::PermanentlyIgnoredConflict(user.to_string()));
        }
        if !self.absent.remove(user) {
            return Err(StandupError::NotExcluded(user.to_string()));
        }
        Ok(())
    }

    /// Removes `user` from the absent set without the usual checks.
    /// Used when a `ready` caller reinstates themselves mid-session.
    pub fn reinstate(&mut self, user: &str) -> bool {
        self.absent.remove(user)
    }

    pub fn ignored(&self) -> impl Iterator<Item = &str> {
        self.ignored.iter().map(String::as_str)
    }

    pub fn absent(&self) -> impl Iterator<Item = &str> {
        self.absent.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty() && self.absent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> Vec<String> {
        vec!["alice".into(), "bob".into(), "carol".into()]
    }

    #[test]
    fn test_mark_absent() {
        let mut roster = Roster::default();
        roster.mark_absent("bob", &active()).unwrap();
        assert!(roster.is_absent("bob"));
        assert!(!roster.is_ignored("bob"));
    }

    #[test]
    fn test_mark_absent_unknown_user() {
        let mut roster = Roster::default();
        assert_eq!(
            roster.mark_absent("mallory", &active()),
            Err(StandupError::UnknownUser("mallory".into()))
        );
    }

    #[test]
    fn test_mark_absent_twice_is_already_excluded() {
        let mut roster = Roster::default();
        roster.mark_absent("bob", &active()).unwrap();
        // "bob" is no longer in the active universe once absent.
        let remaining = vec!["alice".to_string(), "carol".to_string()];
        assert_eq!(
            roster.mark_absent("bob", &remaining),
            Err(StandupError::AlreadyExcluded("bob".into()))
        );
    }

    #[test]
    fn test_heed_returns_user_to_eligibility() {
        let mut roster = Roster::default();
        roster.mark_absent("bob", &active()).unwrap();
        roster
            .mark_heeded("bob", &["alice".to_string(), "carol".to_string()])
            .unwrap();
        assert!(!roster.is_absent("bob"));
    }

    #[test]
    fn test_heed_ignored_user_needs_admin() {
        let mut roster = Roster::new(vec!["bob".to_string()]);
        assert_eq!(
            roster.mark_heeded("bob", &active()),
            Err(StandupError::PermanentlyIgnoredConflict("bob".into()))
        );
    }

    #[test]
    fn test_heed_active_user_is_not_excluded() {
        let mut roster = Roster::default();
        assert_eq!(
            roster.mark_heeded("alice", &active()),
            Err(StandupError::NotExcluded("alice".into()))
        );
    }

    #[test]
    fn test_eligible_excludes_both_sets() {
        let mut roster = Roster::new(vec!["carol".to_string()]);
        roster.mark_absent("bob", &active()).unwrap();
        let eligible = roster.eligible(active());
        assert_eq!(eligible, vec!["alice".to_string()]);
    }
}
