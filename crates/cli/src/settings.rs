use crate::env::EnvManager;
use connectors::{
    error::ConfigError,
    settings::{ApiSettings, DatabaseSettings},
};
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "script.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

const KEY_LOG_FILE: &str = "LOG_FILE";
const KEY_LOG_FILTER: &str = "RUST_LOG";

/// Everything the binary needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database: DatabaseSettings,
    pub api: ApiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub file: PathBuf,
    pub filter: String,
}

impl LogSettings {
    pub fn from_env(env: &EnvManager) -> Self {
        let non_empty = |key: &str| env.get(key).filter(|v| !v.trim().is_empty());
        LogSettings {
            file: PathBuf::from(non_empty(KEY_LOG_FILE).unwrap_or(DEFAULT_LOG_FILE)),
            filter: non_empty(KEY_LOG_FILTER)
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }
}

impl AppSettings {
    pub fn from_env(env: &EnvManager) -> Result<Self, ConfigError> {
        Ok(AppSettings {
            database: DatabaseSettings::from_vars(env.all())?,
            api: ApiSettings::from_vars(env.all())?,
            log: LogSettings::from_env(env),
        })
    }
}
