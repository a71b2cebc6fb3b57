//! # Session Commands
//!
//! Handles `!standup`, `!start`, and `!cancel`: the lifecycle edges of the
//! state machine.

use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Directory};
use crate::domain::types::StandupError;
use crate::interface::commands::{topics, turn};
use crate::strings::messages;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// `!standup`: resolves the eligible users, shuffles them into a queue,
/// and greets the room.
pub async fn handle_standup(
    config: &AppConfig,
    state: &Arc<Mutex<BotState>>,
    chat: &(impl ChatProvider + Directory),
) -> Result<()> {
    let members = chat.resolve_members().await.map_err(|e| anyhow::anyhow!(e))?;

    let mut guard = state.lock().await;
    let eligible = guard.roster.eligible(members);
    match guard.session.begin(eligible) {
        Ok(()) => {
            chat.send_message(&messages::greeting(&config.standup.greeting))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Err(_) => {
            chat.send_message(messages::ALREADY_IN_PROCESS)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!start`: records the start timestamp and calls on the first speaker.
pub async fn handle_start(
    config: &AppConfig,
    state: &Arc<Mutex<BotState>>,
    chat: &impl ChatProvider,
) -> Result<()> {
    let outcome = {
        let mut guard = state.lock().await;
        guard.session.start()
    };
    match outcome {
        Ok(turn_outcome) => {
            chat.send_message(&messages::start(&config.standup.start_message))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            turn::announce_turn(chat, turn_outcome).await?;
        }
        Err(StandupError::SessionAlreadyActive) => {
            chat.send_message(messages::ALREADY_STARTED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Err(_) => {
            chat.send_message(messages::NOT_STARTED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!cancel`: flushes whatever was tabled, says goodbye, resets.
pub async fn handle_cancel(state: &Arc<Mutex<BotState>>, chat: &impl ChatProvider) -> Result<()> {
    let cancelled = {
        let mut guard = state.lock().await;
        guard.session.cancel()
    };
    match cancelled {
        Ok(tabled) => {
            topics::announce_tabled(chat, &tabled).await?;
            chat.send_message(messages::CANCELLED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Err(_) => {
            chat.send_message(messages::NOT_STARTED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}
