//! # Domain Types
//!
//! Common data structures and enums used across the standup logic.
//! `StandupError` is the closed taxonomy of user-facing failures; every
//! variant maps 1:1 to a single announcement at the handler boundary.

use thiserror::Error;

/// Failures raised by roster, queue, and session operations.
///
/// None of these are fatal. Handlers convert each variant into one
/// human-readable message and the process carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StandupError {
    #[error("a standup is already in process")]
    SessionAlreadyActive,

    #[error("standup has not started")]
    SessionNotStarted,

    /// Not user-visible: the state machine interprets this as "session complete".
    #[error("the participant queue is exhausted")]
    QueueExhausted,

    #[error("unrecognized user: {0}")]
    UnknownUser(String),

    #[error("user is already excluded: {0}")]
    AlreadyExcluded(String),

    #[error("user is not excluded: {0}")]
    NotExcluded(String),

    #[error("user is permanently ignored: {0}")]
    PermanentlyIgnoredConflict(String),

    #[error("caller name is empty")]
    EmptyCaller,

    #[error("unrecognized caller: {0}")]
    UnrecognizedCaller(String),

    #[error("caller is ignored: {0}")]
    CallerIgnored(String),

    #[error("it is already the caller's turn")]
    AlreadyCurrentTurn,

    #[error("caller already went this session")]
    AlreadyWentThisSession,

    #[error("user is not waiting in the queue: {0}")]
    NotFound(String),
}

/// One deferred discussion item, collected during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    pub author: String,
    pub text: String,
}

/// What a session hands back when it ends, for announcement purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Whole minutes from start to end. `None` when the session was never
    /// formally started (no start timestamp to measure from).
    pub duration_minutes: Option<i64>,
    pub topics: Vec<TopicEntry>,
}
