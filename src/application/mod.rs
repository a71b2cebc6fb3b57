//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes the session state machine, participant queue, roster,
//! topic log, command routing, and state management.

pub mod parsing;
pub mod queue;
pub mod roster;
pub mod router;
pub mod session;
pub mod state;
pub mod topics;
