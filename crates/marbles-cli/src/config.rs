//! Environment configuration for the terminal front end.

use marbles_core::{BotDifficulty, DEFAULT_COMPUTER_DELAY_MS};
use thiserror::Error;
use tracing::info;

pub const DIFFICULTY_VAR: &str = "MARBLES_DIFFICULTY";
pub const DELAY_VAR: &str = "MARBLES_COMPUTER_DELAY_MS";
pub const SEED_VAR: &str = "MARBLES_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Difficulty at session start; can be changed in-game
    pub difficulty: BotDifficulty,
    /// Pause before the computer replies
    pub computer_delay_ms: u64,
    /// Fixed seed for the computer's RNG, entropy when unset
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            difficulty: BotDifficulty::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        info!(
            difficulty = %config.difficulty,
            delay_ms = config.computer_delay_ms,
            seed = ?config.seed,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Read configuration through `lookup`, unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DIFFICULTY_VAR) {
            config.difficulty = value.parse::<BotDifficulty>().map_err(|e| {
                ConfigError::Invalid {
                    var: DIFFICULTY_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(DELAY_VAR) {
            config.computer_delay_ms = parse_u64(DELAY_VAR, &value)?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_u64(SEED_VAR, &value)?);
        }

        Ok(config)
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
