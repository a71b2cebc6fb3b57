//! # Roster Commands
//!
//! Handles `!ignore`, `!heed`, and `!ignoring`: the temporary-absence
//! roster that outlives any single session. The permanently-ignored set
//! is config-seeded and only an admin edit changes it.

use crate::application::state::BotState;
use crate::domain::traits::{ChatProvider, Directory};
use crate::domain::types::StandupError;
use crate::strings::messages;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// `!ignore <username>`: stop calling on a user until someone heeds them.
pub async fn handle_ignore(
    state: &Arc<Mutex<BotState>>,
    chat: &(impl ChatProvider + Directory),
    args: &str,
) -> Result<()> {
    let user = args.trim();
    if user.is_empty() {
        chat.send_message(messages::WHO_IGNORE)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let members = chat.resolve_members().await.map_err(|e| anyhow::anyhow!(e))?;

    let result = {
        let mut guard = state.lock().await;
        let active = guard.roster.eligible(members);
        guard.roster.mark_absent(user, &active)
    };

    let reply = match result {
        Ok(()) => messages::will_ignore(user),
        Err(StandupError::UnknownUser(_)) => messages::UNRECOGNIZED_USER.to_string(),
        Err(StandupError::AlreadyExcluded(_)) => messages::ALREADY_IGNORING.to_string(),
        Err(other) => {
            tracing::warn!("Unexpected ignore failure for {}: {}", user, other);
            return Ok(());
        }
    };
    chat.send_message(&reply).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// `!heed <username>`: start calling on an absent user again, from the
/// next queue build onward.
pub async fn handle_heed(
    state: &Arc<Mutex<BotState>>,
    chat: &(impl ChatProvider + Directory),
    args: &str,
) -> Result<()> {
    let user = args.trim();
    if user.is_empty() {
        chat.send_message(messages::WHO_HEED)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let members = chat.resolve_members().await.map_err(|e| anyhow::anyhow!(e))?;

    let result = {
        let mut guard = state.lock().await;
        let active = guard.roster.eligible(members);
        guard.roster.mark_heeded(user, &active)
    };

    let reply = match result {
        Ok(()) => messages::will_heed(user),
        Err(StandupError::UnknownUser(_)) => messages::UNRECOGNIZED_USER.to_string(),
        Err(StandupError::PermanentlyIgnoredConflict(_)) => messages::HEED_NEEDS_ADMIN.to_string(),
        Err(StandupError::NotExcluded(_)) => messages::NOT_IGNORING.to_string(),
        Err(other) => {
            tracing::warn!("Unexpected heed failure for {}: {}", user, other);
            return Ok(());
        }
    };
    chat.send_message(&reply).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// `!ignoring`: reports both exclusion sets for human display.
pub async fn handle_ignoring(state: &Arc<Mutex<BotState>>, chat: &impl ChatProvider) -> Result<()> {
    let (ignored, absent) = {
        let guard = state.lock().await;
        if guard.roster.is_empty() {
            drop(guard);
            chat.send_message(messages::IGNORING_NOBODY)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            return Ok(());
        }
        let ignored: Vec<String> = guard.roster.ignored().map(str::to_string).collect();
        let absent: Vec<String> = guard.roster.absent().map(str::to_string).collect();
        (ignored, absent)
    };

    if !ignored.is_empty() {
        let names: Vec<&str> = ignored.iter().map(String::as_str).collect();
        chat.send_message(&messages::never_called_on(&names))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if !absent.is_empty() {
        let names: Vec<&str> = absent.iter().map(String::as_str).collect();
        chat.send_message(&messages::ignoring_for_now(&names))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}
