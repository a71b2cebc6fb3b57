//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Directory).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Slack, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a message with an attached image (caption + title + image URL)
    async fn send_attachment(
        &self,
        content: &str,
        title: &str,
        image_url: &str,
    ) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for user/channel lookups in the chat room.
///
/// The core derives the eligible-speaker universe from `resolve_members`
/// on every queue build; the name lookups are only used to rewrite raw
/// mention tokens into something readable before a topic is logged.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Active (non-deleted) members of the room, excluding the bot itself.
    async fn resolve_members(&self) -> Result<Vec<String>, String>;

    /// Human-readable name for a user ID; falls back to the raw ID.
    async fn resolve_user_name(&self, user_id: &str) -> String;

    /// Human-readable name for a channel/room ID; falls back to the raw ID.
    async fn resolve_channel_name(&self, channel_id: &str) -> String;
}
