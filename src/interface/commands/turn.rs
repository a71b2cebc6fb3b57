//! # Turn Commands
//!
//! Handles `!next`, `!skip`, `!later`, `!ready`, and `!left`: everything
//! that moves the floor between participants mid-session.

use crate::application::session::{ReadyOutcome, TurnOutcome};
use crate::application::state::BotState;
use crate::domain::traits::{ChatProvider, Directory};
use crate::domain::types::StandupError;
use crate::interface::commands::topics;
use crate::strings::messages;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Announces whoever is up next, or the end-of-session report (duration,
/// tabled topics, goodbye) when the queue just ran dry.
pub(crate) async fn announce_turn(chat: &impl ChatProvider, outcome: TurnOutcome) -> Result<()> {
    match outcome {
        TurnOutcome::Next(user) => {
            chat.send_message(&messages::youre_up(&user))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        TurnOutcome::Finished(report) => {
            if let Some(minutes) = report.duration_minutes {
                chat.send_message(&messages::standup_duration(minutes))
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            topics::announce_tabled(chat, &report.topics).await?;
            chat.send_message(messages::GOODBYE)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!next`: the current speaker is done, call on the next one.
pub async fn handle_next(state: &Arc<Mutex<BotState>>, chat: &impl ChatProvider) -> Result<()> {
    let outcome = {
        let mut guard = state.lock().await;
        guard.session.next()
    };
    match outcome {
        Ok(turn_outcome) => announce_turn(chat, turn_outcome).await?,
        Err(_) => {
            chat.send_message(messages::NOT_STARTED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!skip`: announce the skip, then behave exactly like `!next`.
/// The skipped speaker does not return this session.
pub async fn handle_skip(state: &Arc<Mutex<BotState>>, chat: &impl ChatProvider) -> Result<()> {
    let (skipped, outcome) = {
        let mut guard = state.lock().await;
        let skipped = guard.session.current().map(str::to_string);
        (skipped, guard.session.next())
    };
    match outcome {
        Ok(turn_outcome) => {
            if let Some(user) = skipped {
                chat.send_message(&messages::skipping(&user))
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            announce_turn(chat, turn_outcome).await?;
        }
        Err(_) => {
            chat.send_message(messages::NOT_STARTED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!later`: the current speaker isn't ready; move them to the back of the
/// queue and call on the next one.
pub async fn handle_later(state: &Arc<Mutex<BotState>>, chat: &impl ChatProvider) -> Result<()> {
    let (deferred, outcome) = {
        let mut guard = state.lock().await;
        let deferred = guard.session.current().map(str::to_string);
        (deferred, guard.session.later())
    };
    match outcome {
        Ok(turn_outcome) => {
            if let Some(user) = deferred {
                chat.send_message(&messages::call_later(&user))
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            announce_turn(chat, turn_outcome).await?;
        }
        Err(_) => {
            chat.send_message(messages::NOT_STARTED)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!ready`: the sender wants to give their standup right now.
pub async fn handle_ready(
    state: &Arc<Mutex<BotState>>,
    chat: &(impl ChatProvider + Directory),
    sender: &str,
) -> Result<()> {
    let members = chat.resolve_members().await.map_err(|e| anyhow::anyhow!(e))?;

    let outcome = {
        let mut guard = state.lock().await;
        let BotState { roster, session } = &mut *guard;
        session.ready(roster, &members, sender)
    };

    match outcome {
        Ok(ReadyOutcome::Reinstated { previous }) => {
            if let Some(prev) = previous {
                chat.send_message(&messages::come_back_to(&prev))
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            chat.send_message(&messages::welcome_back(sender))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Ok(ReadyOutcome::Advanced { previous }) => {
            if let Some(prev) = previous {
                chat.send_message(&messages::come_back_to(&prev))
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            chat.send_message(&messages::go_ahead(sender))
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Err(err) => {
            let reply = match err {
                StandupError::EmptyCaller => messages::GHOST_CALLER,
                StandupError::UnrecognizedCaller(_) => messages::UNRECOGNIZED_CALLER,
                StandupError::CallerIgnored(_) => messages::CALLER_IGNORED,
                StandupError::AlreadyCurrentTurn => messages::ALREADY_YOUR_TURN,
                StandupError::AlreadyWentThisSession => messages::ALREADY_WENT,
                _ => messages::NOT_STARTED,
            };
            chat.send_message(reply).await.map_err(|e| anyhow::anyhow!(e))?;
        }
    }
    Ok(())
}

/// `!left`: reports the remaining speaking order.
pub async fn handle_left(state: &Arc<Mutex<BotState>>, chat: &impl ChatProvider) -> Result<()> {
    let reply = {
        let guard = state.lock().await;
        let remaining: Vec<&str> = guard.session.remaining().collect();
        if remaining.is_empty() {
            messages::NOBODY_LEFT.to_string()
        } else {
            messages::whos_left(&remaining)
        }
    };
    chat.send_message(&reply).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
