use std::env;

use crate::error::ConfigError;

/// Environment variable holding the weather API key.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Runtime configuration, read once at startup and passed by reference to
/// whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honored first: its entries
    /// are loaded into the environment before the lookup. A missing `.env`
    /// file is not an error; a missing or blank key is.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_value(env::var(API_KEY_VAR).ok())
    }

    fn from_value(raw: Option<String>) -> Result<Self, ConfigError> {
        match raw {
            None => Err(ConfigError::Missing(API_KEY_VAR)),
            Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(API_KEY_VAR)),
            Some(value) => Ok(Self { api_key: value }),
        }
    }
}
