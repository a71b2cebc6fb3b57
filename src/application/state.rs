//! # Bot State
//!
//! The process-wide mutable state: one standup `Session` and the `Roster`
//! that outlives it. Held behind `Arc<Mutex<..>>` and mutated only by
//! sequential command handling, so no further locking discipline applies.
//! Nothing here is persisted; a restart forgets everything by design.

use crate::application::roster::Roster;
use crate::application::session::Session;
use crate::domain::config::AppConfig;

#[derive(Debug, Default)]
pub struct BotState {
    pub roster: Roster,
    pub session: Session,
}

impl BotState {
    /// Fresh state with the permanently-ignored set seeded from config.
    pub fn new(config: &AppConfig) -> Self {
        let ignored = config
            .standup
            .ignore
            .iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        Self {
            roster: Roster::new(ignored),
            session: Session::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{MatrixConfig, ServicesConfig, StandupConfig};

    fn config_with_ignores(ignore: Vec<String>) -> AppConfig {
        AppConfig {
            services: ServicesConfig {
                matrix: MatrixConfig {
                    username: "bot".into(),
                    password: "pw".into(),
                    homeserver: "https://example.org".into(),
                    display_name: None,
                },
            },
            standup: StandupConfig {
                ignore,
                ..StandupConfig::default()
            },
            giphy: Default::default(),
        }
    }

    #[test]
    fn test_seed_ignores_are_trimmed() {
        let config =
            config_with_ignores(vec![" @lurker:example.org ".into(), "".into()]);
        let state = BotState::new(&config);
        assert!(state.roster.is_ignored("@lurker:example.org"));
        assert_eq!(state.roster.ignored().count(), 1);
    }
}
