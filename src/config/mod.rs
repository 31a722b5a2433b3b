//! # Configuration
//!
//! TOML configuration for the game binary.
//!
//! ```toml
//! [game]
//! # world_file = "data/worlds/mansion.json"   # omit to play the built-in mansion
//! integrity_policy = "warn"                   # or "fail_fast"
//! show_map_on_start = false
//!
//! [logging]
//! level = "warn"
//! # file = "relichunt.log"
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::game::IntegrityPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    /// JSON world file; the built-in mansion is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_file: Option<String>,
    /// What to do when the world fails its startup integrity check.
    #[serde(default)]
    pub integrity_policy: IntegrityPolicy,
    /// Print the map right after the intro.
    #[serde(default)]
    pub show_map_on_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`, falling back to `Warn` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_world_and_warn_policy() {
        let config = Config::default();
        assert!(config.game.world_file.is_none());
        assert_eq!(config.game.integrity_policy, IntegrityPolicy::Warn);
        assert!(!config.game.show_map_on_start);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [game]
            integrity_policy = "fail_fast"
            "#,
        )
        .unwrap();
        assert_eq!(config.game.integrity_policy, IntegrityPolicy::FailFast);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn unknown_log_level_falls_back() {
        let logging = LoggingConfig {
            level: "chatty".into(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
        let logging = LoggingConfig {
            level: "debug".into(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(back.game.integrity_policy, IntegrityPolicy::Warn);
        assert_eq!(back.logging.level, "warn");
    }
}
