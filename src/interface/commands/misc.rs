//! # Miscellaneous Commands
//!
//! Handles anything the router does not recognize. With the GIF responder
//! enabled the bot answers with a reaction image; otherwise it just
//! admits confusion. Lookup failures degrade to the plain reply.

use crate::domain::traits::ChatProvider;
use crate::infrastructure::giphy::GiphyClient;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_unknown(
    giphy: Option<&GiphyClient>,
    chat: &impl ChatProvider,
    name: &str,
    args: &str,
) -> Result<()> {
    let text = if args.is_empty() {
        name.to_string()
    } else {
        format!("{name} {args}")
    };

    if let Some(client) = giphy {
        match client.search(&text).await {
            Ok(Some(gif)) => {
                chat.send_attachment(&messages::not_sure_what(&text), &gif.title, &gif.image_url)
                    .await
                    .map_err(|e| anyhow::anyhow!(e))?;
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Giphy lookup failed for '{}': {}", text, e),
        }
    }

    chat.send_message(&messages::not_sure_what(&text))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
