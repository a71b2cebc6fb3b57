//! # Command Handlers
//!
//! Contains specific handler functions for each supported command
//! (e.g., !standup, !next, !ignore). These handlers are invoked by the
//! Router and convert core results and errors into announcements.

pub mod help;
pub mod misc;
pub mod roster;
pub mod session;
pub mod topics;
pub mod turn;
