//! # Session State Machine
//!
//! Lifecycle controller for one standup run: Idle -> Collecting ->
//! InProgress -> (Cancelled | Completed) -> Idle. Owns the participant
//! queue and the topic log for the session's duration and enforces which
//! operations are legal in which phase. Discarded wholesale on reset;
//! only the roster survives across sessions.

use crate::application::queue::ParticipantQueue;
use crate::application::roster::Roster;
use crate::application::topics::TopicLog;
use crate::domain::types::{SessionReport, StandupError};
use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Queue gathered, waiting for an explicit `!start`.
    Collecting,
    InProgress,
}

/// Result of handing the floor to the next speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Next(String),
    /// Queue exhausted: the session completed and reset itself.
    Finished(SessionReport),
}

/// Result of a successful `ready` jump-the-queue call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// Caller was absent; they are back on the roster and speaking now.
    Reinstated { previous: Option<String> },
    /// Caller was waiting in the queue and is speaking now.
    Advanced { previous: Option<String> },
}

#[derive(Debug, Default, Clone)]
pub struct Session {
    phase: Phase,
    queue: ParticipantQueue,
    current: Option<String>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    topics: TopicLog,
}

impl Session {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn remaining(&self) -> impl Iterator<Item = &str> {
        self.queue.remaining()
    }

    pub fn topics_mut(&mut self) -> &mut TopicLog {
        &mut self.topics
    }

    /// `!standup`: gathers the eligible users into a shuffled queue and
    /// waits for `!start`.
    pub fn begin(&mut self, eligible: Vec<String>) -> Result<(), StandupError> {
        if self.phase != Phase::Idle {
            return Err(StandupError::SessionAlreadyActive);
        }
        self.queue = ParticipantQueue::build(eligible);
        self.topics = TopicLog::default();
        self.phase = Phase::Collecting;
        Ok(())
    }

    /// `!start`: records the start timestamp and calls on the first speaker.
    pub fn start(&mut self) -> Result<TurnOutcome, StandupError> {
        match self.phase {
            Phase::Idle => Err(StandupError::SessionNotStarted),
            Phase::InProgress => Err(StandupError::SessionAlreadyActive),
            Phase::Collecting => {
                self.started_at = Some(Utc::now());
                self.phase = Phase::InProgress;
                self.next()
            }
        }
    }

    /// `!next` (and the tail of `!skip`/`!later`): pops the next speaker,
    /// or completes the session when the queue runs dry.
    pub fn next(&mut self) -> Result<TurnOutcome, StandupError> {
        if self.phase == Phase::Idle {
            return Err(StandupError::SessionNotStarted);
        }
        // `!next` before `!start` still works; the session just has no
        // start timestamp, so no duration gets reported at the end.
        self.phase = Phase::InProgress;
        match self.queue.pop_next() {
            Ok(user) => {
                self.current = Some(user.clone());
                Ok(TurnOutcome::Next(user))
            }
            Err(StandupError::QueueExhausted) => Ok(TurnOutcome::Finished(self.complete())),
            Err(other) => Err(other),
        }
    }

    /// `!later`: moves the current speaker to the back, then pops the next.
    /// Length-preserving: the current slot empties, the queue grows by one.
    pub fn later(&mut self) -> Result<TurnOutcome, StandupError> {
        if self.phase == Phase::Idle {
            return Err(StandupError::SessionNotStarted);
        }
        if let Some(user) = self.current.take() {
            self.queue.requeue(user);
        }
        self.next()
    }

    /// Pulls `user` out of the queue and gives them the floor; whoever was
    /// speaking goes to the back. With `reinstated` the user is allowed to
    /// be missing from the queue (they were just removed from the absent
    /// set and never got queued).
    pub fn advance_to(
        &mut self,
        user: &str,
        reinstated: bool,
    ) -> Result<Option<String>, StandupError> {
        if !self.queue.remove(user) && !reinstated {
            return Err(StandupError::NotFound(user.to_string()));
        }
        let previous = self.current.replace(user.to_string());
        if let Some(prev) = previous.clone() {
            self.queue.requeue(prev);
        }
        Ok(previous)
    }

    /// `!ready`: jump-the-queue. Evaluated in strict order so each caller
    /// gets exactly one answer:
    ///   1. blank caller, 2. caller unknown to the room, 3. caller ignored,
    ///   4. caller absent (reinstate and call on them), 5. caller waiting
    ///   (pull them forward), 6. caller already speaking, 7. caller already
    ///   went this session.
    pub fn ready(
        &mut self,
        roster: &mut Roster,
        members: &[String],
        caller: &str,
    ) -> Result<ReadyOutcome, StandupError> {
        if self.phase == Phase::Idle {
            return Err(StandupError::SessionNotStarted);
        }
        if caller.is_empty() {
            return Err(StandupError::EmptyCaller);
        }
        let active = roster.eligible(members.to_vec());
        if !active.iter().any(|u| u == caller)
            && !roster.is_ignored(caller)
            && !roster.is_absent(caller)
        {
            return Err(StandupError::UnrecognizedCaller(caller.to_string()));
        }
        if roster.is_ignored(caller) {
            return Err(StandupError::CallerIgnored(caller.to_string()));
        }
        if roster.is_absent(caller) {
            roster.reinstate(caller);
            let previous = self.advance_to(caller, true)?;
            return Ok(ReadyOutcome::Reinstated { previous });
        }
        if self.queue.contains(caller) {
            let previous = self.advance_to(caller, false)?;
            return Ok(ReadyOutcome::Advanced { previous });
        }
        if self.current.as_deref() == Some(caller) {
            return Err(StandupError::AlreadyCurrentTurn);
        }
        Err(StandupError::AlreadyWentThisSession)
    }

    /// `!cancel`: flushes whatever topics exist and resets to Idle.
    pub fn cancel(&mut self) -> Result<Vec<crate::domain::types::TopicEntry>, StandupError> {
        if self.phase == Phase::Idle {
            return Err(StandupError::SessionNotStarted);
        }
        let topics = self.topics.drain();
        self.reset();
        Ok(topics)
    }

    /// Queue exhausted: records the end timestamp, computes the duration
    /// in whole minutes (only when both timestamps exist), flushes the
    /// topic log, and resets to Idle.
    fn complete(&mut self) -> SessionReport {
        self.ended_at = Some(Utc::now());
        let duration_minutes = match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        };
        let topics = self.topics.drain();
        self.reset();
        SessionReport {
            duration_minutes,
            topics,
        }
    }

    /// Clears queue, topic log, timestamps, and current-speaker pointer
    /// unconditionally.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TopicEntry;

    fn members() -> Vec<String> {
        ["a", "b", "c"].iter().map(|s| s.to_string()).collect()
    }

    /// Builds an in-progress session with a fixed queue order and no
    /// current speaker popped yet.
    fn collecting_session(order: &[&str]) -> Session {
        let mut session = Session::default();
        session.begin(order.iter().map(|s| s.to_string()).collect()).unwrap();
        session.queue = ParticipantQueue::default();
        for user in order {
            session.queue.requeue(user.to_string());
        }
        session
    }

    #[test]
    fn test_begin_twice_is_already_active() {
        let mut session = Session::default();
        session.begin(members()).unwrap();
        assert_eq!(
            session.begin(members()),
            Err(StandupError::SessionAlreadyActive)
        );
        // Guard is a no-op: still collecting, queue intact.
        assert_eq!(session.phase(), Phase::Collecting);
        assert_eq!(session.remaining().count(), 3);
    }

    #[test]
    fn test_commands_fail_while_idle() {
        let mut session = Session::default();
        assert_eq!(session.start(), Err(StandupError::SessionNotStarted));
        assert_eq!(session.next(), Err(StandupError::SessionNotStarted));
        assert_eq!(session.later(), Err(StandupError::SessionNotStarted));
        assert_eq!(session.cancel(), Err(StandupError::SessionNotStarted));
    }

    #[test]
    fn test_full_session_walkthrough() {
        // Eligible {a,b,c}, forced order [c,b,a].
        let mut session = collecting_session(&["c", "b", "a"]);

        // start pops c.
        assert_eq!(session.start().unwrap(), TurnOutcome::Next("c".into()));
        assert_eq!(session.current(), Some("c"));
        assert_eq!(session.remaining().collect::<Vec<_>>(), vec!["b", "a"]);

        // next pops b.
        assert_eq!(session.next().unwrap(), TurnOutcome::Next("b".into()));
        assert_eq!(session.remaining().collect::<Vec<_>>(), vec!["a"]);

        // later requeues b and pops a.
        assert_eq!(session.later().unwrap(), TurnOutcome::Next("a".into()));
        assert_eq!(session.remaining().collect::<Vec<_>>(), vec!["b"]);

        // next pops b again.
        assert_eq!(session.next().unwrap(), TurnOutcome::Next("b".into()));
        assert_eq!(session.remaining().count(), 0);

        // next on the empty queue completes and resets.
        match session.next().unwrap() {
            TurnOutcome::Finished(report) => {
                assert_eq!(report.duration_minutes, Some(0));
                assert!(report.topics.is_empty());
            }
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_later_is_length_preserving() {
        let mut session = collecting_session(&["a", "b", "c"]);
        session.start().unwrap();
        let before = session.remaining().count();
        session.later().unwrap();
        assert_eq!(session.remaining().count(), before);
    }

    #[test]
    fn test_skip_drops_one_relative_to_later() {
        // skip = announce + next: the skipped speaker never returns, so the
        // queue ends up one shorter than the same state after later.
        let mut skipped = collecting_session(&["a", "b", "c"]);
        skipped.start().unwrap();
        skipped.next().unwrap();

        let mut deferred = collecting_session(&["a", "b", "c"]);
        deferred.start().unwrap();
        deferred.later().unwrap();

        assert_eq!(
            skipped.remaining().count() + 1,
            deferred.remaining().count()
        );
    }

    #[test]
    fn test_ready_pulls_caller_from_queue() {
        let mut roster = Roster::default();
        let mut session = collecting_session(&["a", "b", "c"]);
        session.start().unwrap(); // current = a

        let outcome = session.ready(&mut roster, &members(), "c").unwrap();
        assert_eq!(
            outcome,
            ReadyOutcome::Advanced {
                previous: Some("a".into())
            }
        );
        assert_eq!(session.current(), Some("c"));
        // Previous speaker lands at the back of the queue.
        assert_eq!(session.remaining().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_ready_reinstates_absent_caller() {
        let mut roster = Roster::default();
        roster
            .mark_absent("c", &["a".to_string(), "b".to_string(), "c".to_string()])
            .unwrap();

        let mut session = collecting_session(&["a", "b"]);
        session.start().unwrap(); // current = a

        let outcome = session.ready(&mut roster, &members(), "c").unwrap();
        assert_eq!(
            outcome,
            ReadyOutcome::Reinstated {
                previous: Some("a".into())
            }
        );
        assert_eq!(session.current(), Some("c"));
        assert!(!roster.is_absent("c"));
        assert_eq!(session.remaining().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_ready_on_current_speaker_is_noop() {
        let mut roster = Roster::default();
        let mut session = collecting_session(&["a", "b"]);
        session.start().unwrap();

        assert_eq!(
            session.ready(&mut roster, &members(), "a"),
            Err(StandupError::AlreadyCurrentTurn)
        );
        assert_eq!(session.current(), Some("a"));
        assert_eq!(session.remaining().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_ready_after_speaking_is_rejected() {
        let mut roster = Roster::default();
        let mut session = collecting_session(&["a", "b"]);
        session.start().unwrap(); // a
        session.next().unwrap(); // b; a is done

        assert_eq!(
            session.ready(&mut roster, &members(), "a"),
            Err(StandupError::AlreadyWentThisSession)
        );
    }

    #[test]
    fn test_ready_rejects_blank_ignored_and_unknown() {
        let mut roster = Roster::new(vec!["b".to_string()]);
        let mut session = collecting_session(&["a"]);
        session.start().unwrap();

        assert_eq!(
            session.ready(&mut roster, &members(), ""),
            Err(StandupError::EmptyCaller)
        );
        assert_eq!(
            session.ready(&mut roster, &members(), "b"),
            Err(StandupError::CallerIgnored("b".into()))
        );
        assert_eq!(
            session.ready(&mut roster, &members(), "mallory"),
            Err(StandupError::UnrecognizedCaller("mallory".into()))
        );
    }

    #[test]
    fn test_advance_to_missing_user_is_not_found() {
        let mut session = collecting_session(&["a", "b"]);
        session.start().unwrap();
        assert_eq!(
            session.advance_to("mallory", false),
            Err(StandupError::NotFound("mallory".into()))
        );
    }

    #[test]
    fn test_cancel_flushes_topics_and_resets() {
        let mut session = collecting_session(&["a", "b"]);
        session.start().unwrap();
        session.topics_mut().table("a", "deferred topic");

        let topics = session.cancel().unwrap();
        assert_eq!(
            topics,
            vec![TopicEntry {
                author: "a".into(),
                text: "deferred topic".into()
            }]
        );
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.remaining().count(), 0);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_next_before_start_reports_no_duration() {
        let mut session = collecting_session(&["a"]);
        session.next().unwrap();
        match session.next().unwrap() {
            TurnOutcome::Finished(report) => assert_eq!(report.duration_minutes, None),
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_roster_exclusions_never_reach_the_queue() {
        let mut roster = Roster::new(vec!["b".to_string()]);
        roster
            .mark_absent("c", &["a".to_string(), "c".to_string()])
            .unwrap();

        let mut session = Session::default();
        session.begin(roster.eligible(members())).unwrap();
        let queued: Vec<_> = session.remaining().collect();
        assert_eq!(queued, vec!["a"]);
    }
}
