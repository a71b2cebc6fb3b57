//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix service, standup behavior, and the GIF responder.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub standup: StandupConfig,
    #[serde(default)]
    pub giphy: GiphyConfig,
}

impl AppConfig {
    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Behavior of the standup ritual itself.
#[derive(Debug, Deserialize, Clone)]
pub struct StandupConfig {
    /// Room ID the bot runs standups in. Messages from other rooms are dropped.
    #[serde(default)]
    pub room: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_start_message")]
    pub start_message: String,
    /// User IDs we never call on. Removable only by editing this list.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for StandupConfig {
    fn default() -> Self {
        Self {
            room: String::new(),
            greeting: default_greeting(),
            start_message: default_start_message(),
            ignore: Vec::new(),
        }
    }
}

fn default_greeting() -> String {
    "Good morning!".to_string()
}

fn default_start_message() -> String {
    "What did you work on yesterday? What are you working on today? What, if any, are your blockers?"
        .to_string()
}

/// Settings for the unknown-command GIF responder.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct GiphyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let yaml = r#"
services:
  matrix:
    username: "standupbot"
    password: "hunter2"
    homeserver: "https://matrix.example.org"
standup:
  room: "!abc123:example.org"
  greeting: "Guten Morgen!"
  ignore:
    - "@lurker:example.org"
giphy:
  enabled: true
  api_key: "dc6zaTOxFJmzC"
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.services.matrix.username, "standupbot");
        assert_eq!(config.standup.room, "!abc123:example.org");
        assert_eq!(config.standup.greeting, "Guten Morgen!");
        assert_eq!(config.standup.ignore, vec!["@lurker:example.org"]);
        assert!(config.giphy.enabled);
    }

    #[test]
    fn test_standup_defaults() {
        let yaml = r#"
services:
  matrix:
    username: "standupbot"
    password: "hunter2"
    homeserver: "https://matrix.example.org"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.standup.greeting, "Good morning!");
        assert!(config.standup.start_message.contains("blockers"));
        assert!(config.standup.ignore.is_empty());
        assert!(!config.giphy.enabled);
    }
}
