//! # Participant Queue
//!
//! The ordered list of who is left to speak. Built once per session as a
//! uniformly-random permutation of the eligible users, then consumed from
//! the front. Queue order is the fairness mechanism of the whole ritual,
//! so the shuffle must give every permutation equal probability.

use crate::domain::types::StandupError;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

#[derive(Debug, Default, Clone)]
pub struct ParticipantQueue {
    entries: VecDeque<String>,
}

impl ParticipantQueue {
    /// Shuffles the eligible users into the initial speaking order.
    pub fn build(eligible: Vec<String>) -> Self {
        let mut entries = eligible;
        entries.shuffle(&mut rand::thread_rng());
        Self {
            entries: entries.into(),
        }
    }

    /// Removes and returns the front speaker.
    pub fn pop_next(&mut self) -> Result<String, StandupError> {
        self.entries.pop_front().ok_or(StandupError::QueueExhausted)
    }

    /// Appends `user` to the back of the queue.
    pub fn requeue(&mut self, user: String) {
        self.entries.push_back(user);
    }

    /// Removes `user` from wherever it sits in the queue.
    pub fn remove(&mut self, user: &str) -> bool {
        match self.entries.iter().position(|u| u == user) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, user: &str) -> bool {
        self.entries.iter().any(|u| u == user)
    }

    /// Read-only view of the remaining speaking order.
    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<String> {
        ["alice", "bob", "carol", "dave"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_build_is_a_permutation() {
        // Same multiset in and out: no duplicates, no omissions.
        let queue = ParticipantQueue::build(users());
        let mut got: Vec<_> = queue.remaining().map(str::to_string).collect();
        got.sort();
        let mut want = users();
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn test_pop_next_empty_is_exhausted() {
        let mut queue = ParticipantQueue::default();
        assert_eq!(queue.pop_next(), Err(StandupError::QueueExhausted));
        // Still exhausted, never some other error.
        assert_eq!(queue.pop_next(), Err(StandupError::QueueExhausted));
    }

    #[test]
    fn test_pop_consumes_from_front() {
        let mut queue = ParticipantQueue::build(vec!["alice".to_string()]);
        queue.requeue("bob".to_string());
        assert_eq!(queue.pop_next().unwrap(), "alice");
        assert_eq!(queue.pop_next().unwrap(), "bob");
    }

    #[test]
    fn test_remove_from_middle() {
        let mut queue = ParticipantQueue::default();
        for u in users() {
            queue.requeue(u);
        }
        assert!(queue.remove("carol"));
        assert!(!queue.contains("carol"));
        assert_eq!(queue.len(), 3);
        assert!(!queue.remove("carol"));
    }

    #[test]
    fn test_requeue_appends_to_back() {
        let mut queue = ParticipantQueue::default();
        queue.requeue("alice".to_string());
        queue.requeue("bob".to_string());
        let order: Vec<_> = queue.remaining().collect();
        assert_eq!(order, vec!["alice", "bob"]);
    }
}
