//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Giphy
//! - Application: Router, Session, Roster
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::SyncRoomMessageEvent,
    },
};
use std::fs;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing;

use crate::application::router::CommandRouter;
use crate::application::state::BotState;
use crate::domain::config::AppConfig;
use crate::infrastructure::matrix::MatrixService;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Configuration
    let config = AppConfig::load("data/config.yaml")?;

    // 2. Logging Setup
    // Ensure data directory exists
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn")
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting Huddle...");

    // 3. Initialize Application State
    let state = Arc::new(Mutex::new(BotState::new(&config)));
    let router = Arc::new(CommandRouter::new(config.clone(), state));

    // 4. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await?;

    tracing::info!("Logged in as {}", config.services.matrix.username);

    if let Some(name) = &config.services.matrix.display_name {
        let _ = client.account().set_display_name(Some(name.as_str())).await;
    }

    // 5. Event Loop
    let start_time = std::time::SystemTime::now();
    let standup_room = config.standup.room.clone();
    let loop_router = router.clone();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = loop_router.clone();
        let standup_room = standup_room.clone();

        async move {
            if let Some(original_msg) = ev.as_original() {
                // Ignore events older than start_time
                let ts = ev.origin_server_ts();
                let event_time =
                    std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
                if event_time < start_time {
                    return;
                }

                // Standups only happen in the configured room
                if !standup_room.is_empty() && room.room_id().as_str() != standup_room {
                    return;
                }

                if let matrix_sdk::ruma::events::room::message::MessageType::Text(text_content) =
                    &original_msg.content.msgtype
                {
                    let body = &text_content.body;
                    if original_msg.sender == room.own_user_id() {
                        return;
                    }

                    let chat = MatrixService::new(room);

                    // Dispatch
                    if let Err(e) = router
                        .route(&chat, body, original_msg.sender.as_str())
                        .await
                    {
                        tracing::error!("Failed to route message: {}", e);
                    }
                }
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            let _ = room.join().await;
        }
    });

    // 6. Start Sync Loop
    client.sync(SyncSettings::default()).await?;

    Ok(())
}
