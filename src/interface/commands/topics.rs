//! # Topic Commands
//!
//! Handles `!table`: deferring a topic for after the standup. Mention
//! tokens in the topic text are rewritten to readable names before the
//! topic is logged, so the flushed list makes sense later.

use crate::application::parsing;
use crate::application::state::BotState;
use crate::domain::traits::{ChatProvider, Directory};
use crate::domain::types::TopicEntry;
use crate::strings::messages;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// `!table <topic>`: normalizes mentions, logs the topic, acknowledges
/// the author. Empty topic text is logged as-is.
pub async fn handle_table(
    state: &Arc<Mutex<BotState>>,
    chat: &(impl ChatProvider + Directory),
    sender: &str,
    args: &str,
) -> Result<()> {
    let text = normalize_mentions(chat, args).await;

    {
        let mut guard = state.lock().await;
        guard.session.topics_mut().table(sender, &text);
    }

    chat.send_message(&messages::tabled_ack(sender))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// Rewrites raw `<#channelId>` and `<@userId>` tokens into `#name` /
/// `@name` via the Directory collaborator.
async fn normalize_mentions(directory: &impl Directory, raw: &str) -> String {
    let mut text = raw.to_string();

    for channel_id in parsing::channel_mentions(&text) {
        let name = directory.resolve_channel_name(&channel_id).await;
        text = text.replace(&format!("<#{channel_id}>"), &format!("#{name}"));
    }
    for user_id in parsing::user_mentions(&text) {
        let name = directory.resolve_user_name(&user_id).await;
        text = text.replace(&format!("<@{user_id}>"), &format!("@{name}"));
    }
    text
}

/// Announces the tabled-topics header plus one line per entry, in
/// insertion order. No-op when nothing was tabled.
pub(crate) async fn announce_tabled(chat: &impl ChatProvider, topics: &[TopicEntry]) -> Result<()> {
    if topics.is_empty() {
        return Ok(());
    }
    chat.send_message(messages::TABLED_HEADER)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    for entry in topics {
        chat.send_message(&messages::tabled_entry(&entry.text))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}
