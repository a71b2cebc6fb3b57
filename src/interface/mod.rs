//! # Interface Layer
//!
//! Command handlers that translate core results into room announcements.

pub mod commands;
