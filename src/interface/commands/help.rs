//! # Help Command
//!
//! Handles `!help` and `!help <command>`.

use crate::domain::traits::ChatProvider;
use crate::strings::help;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider, args: &str) -> Result<()> {
    let topic = args.trim().trim_start_matches('!');
    let reply = if topic.is_empty() {
        help::main_listing()
    } else {
        match help::command_help(topic) {
            Some(line) => line.to_string(),
            None => help::unknown_topic(topic),
        }
    };
    chat.send_message(&reply).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
