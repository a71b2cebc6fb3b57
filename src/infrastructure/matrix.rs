//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` and `Directory` traits for the Matrix
//! protocol using the `matrix_sdk`. This module acts as the bridge between
//! the generic interfaces used by the bot's core logic and the specific
//! implementation details of the Matrix SDK.

use crate::domain::traits::{ChatProvider, Directory};
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;
use matrix_sdk::ruma::{RoomId, UserId};
use matrix_sdk::RoomMemberships;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), content);
        self.room
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }

    async fn send_attachment(
        &self,
        content: &str,
        title: &str,
        image_url: &str,
    ) -> Result<(), String> {
        // Rendered as one markdown message with an inline image.
        let body = format!("{content}\n![{title}]({image_url})");
        self.send_message(&body).await.map(|_| ())
    }
}

#[async_trait]
impl Directory for MatrixService {
    async fn resolve_members(&self) -> Result<Vec<String>, String> {
        let members = self
            .room
            .members(RoomMemberships::JOIN)
            .await
            .map_err(|e| e.to_string())?;
        let own = self.room.own_user_id();
        Ok(members
            .iter()
            .filter(|m| m.user_id() != own)
            .map(|m| m.user_id().to_string())
            .collect())
    }

    async fn resolve_user_name(&self, user_id: &str) -> String {
        let Ok(parsed) = UserId::parse(user_id) else {
            return user_id.to_string();
        };
        match self.room.get_member(&parsed).await {
            Ok(Some(member)) => member.name().to_string(),
            _ => user_id.to_string(),
        }
    }

    async fn resolve_channel_name(&self, channel_id: &str) -> String {
        let Ok(parsed) = RoomId::parse(channel_id) else {
            return channel_id.to_string();
        };
        match self.room.client().get_room(&parsed) {
            Some(room) => room.name().unwrap_or_else(|| channel_id.to_string()),
            None => channel_id.to_string(),
        }
    }
}
