use crate::error::ConfigError;
use reqwest::Url;
use std::{collections::HashMap, fmt, str::FromStr, time::Duration};
use tokio_postgres::config::SslMode;

pub const DEFAULT_API_URL: &str = "https://random-data-api.com/api/v2/users";
pub const DEFAULT_BATCH_SIZE: u32 = 100;
/// The API answers `size=1` with a bare object instead of an array.
pub const MIN_BATCH_SIZE: u32 = 2;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PG_PORT: u16 = 5432;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// Database keys are lower-case to match the deployed `.env` files.
const KEY_HOST: &str = "host";
const KEY_PORT: &str = "port";
const KEY_DATABASE: &str = "database";
const KEY_USER: &str = "user";
const KEY_PASSWORD: &str = "password";
const KEY_SSLMODE: &str = "sslmode";
const KEY_CONNECT_TIMEOUT: &str = "connect_timeout";

const KEY_API_URL: &str = "API_URL";
const KEY_API_BATCH_SIZE: &str = "API_BATCH_SIZE";
const KEY_API_TIMEOUT: &str = "API_TIMEOUT_SECS";

/// Where and how the users are requested.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub endpoint: Url,
    /// Value of the `size` query parameter.
    pub size: u32,
    pub timeout: Duration,
}

impl ApiSettings {
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let raw_url = optional(vars, KEY_API_URL).unwrap_or(DEFAULT_API_URL);
        let endpoint = Url::parse(raw_url).map_err(|e| invalid(KEY_API_URL, raw_url, e))?;

        let size = parse_or(vars, KEY_API_BATCH_SIZE, DEFAULT_BATCH_SIZE)?;
        if size < MIN_BATCH_SIZE {
            return Err(invalid(
                KEY_API_BATCH_SIZE,
                &size.to_string(),
                format!("must be at least {MIN_BATCH_SIZE}"),
            ));
        }

        let timeout = parse_or(vars, KEY_API_TIMEOUT, DEFAULT_API_TIMEOUT_SECS)?;

        Ok(ApiSettings {
            endpoint,
            size,
            timeout: Duration::from_secs(timeout),
        })
    }
}

/// TLS policy for the PostgreSQL connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslPreference {
    Disable,
    #[default]
    Prefer,
    Require,
}

impl FromStr for SslPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" => Ok(SslPreference::Disable),
            "prefer" => Ok(SslPreference::Prefer),
            "require" => Ok(SslPreference::Require),
            other => Err(format!("unknown sslmode '{other}'")),
        }
    }
}

impl From<SslPreference> for SslMode {
    fn from(value: SslPreference) -> Self {
        match value {
            SslPreference::Disable => SslMode::Disable,
            SslPreference::Prefer => SslMode::Prefer,
            SslPreference::Require => SslMode::Require,
        }
    }
}

/// Connection parameters for the target database.
#[derive(Clone, PartialEq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    pub ssl_mode: SslPreference,
    pub connect_timeout: Duration,
}

impl DatabaseSettings {
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let ssl_mode = match optional(vars, KEY_SSLMODE) {
            Some(raw) => raw
                .parse::<SslPreference>()
                .map_err(|e| invalid(KEY_SSLMODE, raw, e))?,
            None => SslPreference::default(),
        };

        Ok(DatabaseSettings {
            host: required(vars, KEY_HOST)?,
            port: parse_or(vars, KEY_PORT, DEFAULT_PG_PORT)?,
            database: required(vars, KEY_DATABASE)?,
            user: required(vars, KEY_USER)?,
            password: optional(vars, KEY_PASSWORD).map(str::to_string),
            ssl_mode,
            connect_timeout: Duration::from_secs(parse_or(
                vars,
                KEY_CONNECT_TIMEOUT,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .connect_timeout(self.connect_timeout)
            .ssl_mode(self.ssl_mode.into())
            .application_name("user-loader");
        if let Some(password) = &self.password {
            config.password(password);
        }
        config
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("ssl_mode", &self.ssl_mode)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn optional<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn required(vars: &HashMap<String, String>, key: &'static str) -> Result<String, ConfigError> {
    optional(vars, key)
        .map(str::to_string)
        .ok_or(ConfigError::Missing(key))
}

fn parse_or<T>(vars: &HashMap<String, String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match optional(vars, key) {
        Some(raw) => raw.parse::<T>().map_err(|e| invalid(key, raw, e)),
        None => Ok(default),
    }
}

fn invalid(key: &'static str, value: &str, reason: impl fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
