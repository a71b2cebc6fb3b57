//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in
//! `interface/commands`). A message is parsed into the closed `Command`
//! enum, checked against the session phase, and dispatched with the
//! necessary context. Unrecognized commands fall through to the
//! unknown-command responder.

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::parsing;
use crate::application::session::Phase;
use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, Directory};
use crate::infrastructure::giphy::GiphyClient;
use crate::interface::commands;

/// Every command the bot understands, matched exhaustively below so a new
/// variant cannot ship without a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Standup,
    Start,
    Cancel,
    Next,
    Skip,
    Later,
    Table,
    Left,
    Ignore,
    Heed,
    Ignoring,
    Help,
    Ready,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standup" => Some(Self::Standup),
            "start" => Some(Self::Start),
            "cancel" => Some(Self::Cancel),
            "next" => Some(Self::Next),
            "skip" => Some(Self::Skip),
            "later" => Some(Self::Later),
            "table" => Some(Self::Table),
            "left" => Some(Self::Left),
            "ignore" => Some(Self::Ignore),
            "heed" => Some(Self::Heed),
            "ignoring" => Some(Self::Ignoring),
            "help" => Some(Self::Help),
            "ready" => Some(Self::Ready),
            _ => None,
        }
    }

    /// Roster maintenance and help work at any time; everything else needs
    /// a session.
    pub fn allowed_while_idle(&self) -> bool {
        matches!(
            self,
            Self::Standup | Self::Help | Self::Ignore | Self::Heed | Self::Ignoring
        )
    }
}

pub struct CommandRouter {
    config: AppConfig,
    state: Arc<Mutex<BotState>>,
    giphy: Option<GiphyClient>,
}

impl CommandRouter {
    pub fn new(config: AppConfig, state: Arc<Mutex<BotState>>) -> Self {
        let giphy = if config.giphy.enabled {
            config.giphy.api_key.clone().map(GiphyClient::new)
        } else {
            None
        };
        Self {
            config,
            state,
            giphy,
        }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider + Directory,
    {
        let Some((name, args)) = parsing::split_command(message) else {
            return Ok(());
        };

        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}'",
            name,
            args,
            sender
        );

        let Some(cmd) = Command::from_name(&name) else {
            return commands::misc::handle_unknown(self.giphy.as_ref(), chat, &name, args).await;
        };

        if !cmd.allowed_while_idle() {
            let idle = {
                let guard = self.state.lock().await;
                guard.session.phase() == Phase::Idle
            };
            if idle {
                chat.send_message(crate::strings::messages::NOT_STARTED)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
                return Ok(());
            }
        }

        match cmd {
            Command::Standup => {
                commands::session::handle_standup(&self.config, &self.state, chat).await?
            }
            Command::Start => {
                commands::session::handle_start(&self.config, &self.state, chat).await?
            }
            Command::Cancel => commands::session::handle_cancel(&self.state, chat).await?,
            Command::Next => commands::turn::handle_next(&self.state, chat).await?,
            Command::Skip => commands::turn::handle_skip(&self.state, chat).await?,
            Command::Later => commands::turn::handle_later(&self.state, chat).await?,
            Command::Ready => commands::turn::handle_ready(&self.state, chat, sender).await?,
            Command::Left => commands::turn::handle_left(&self.state, chat).await?,
            Command::Table => commands::topics::handle_table(&self.state, chat, sender, args).await?,
            Command::Ignore => commands::roster::handle_ignore(&self.state, chat, args).await?,
            Command::Heed => commands::roster::handle_heed(&self.state, chat, args).await?,
            Command::Ignoring => commands::roster::handle_ignoring(&self.state, chat).await?,
            Command::Help => commands::help::handle_help(chat, args).await?,
        }

        Ok(())
    }
}
