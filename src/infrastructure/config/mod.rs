use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Server configuration, merged from defaults, an optional `appdex.toml`
/// next to the process, and `APPDEX_`-prefixed environment variables
/// (highest precedence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub dataset_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            dataset_path: "data/googleplaystore.xlsx".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("appdex.toml"))
            .merge(Env::prefixed("APPDEX_"))
            .extract()
            .map_err(|err| AppError::Internal(format!("Failed to load configuration: {}", err)))
    }
}
