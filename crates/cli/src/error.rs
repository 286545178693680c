use crate::shutdown::{ExitCode, Signal};
use connectors::{
    error::ConfigError, http::error::FetchError, sql::base::error::ConnectorError,
};
use engine_core::error::PipelineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read env file {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid env file {path}: {reason} at line {line}")]
    EnvFileParse {
        path: PathBuf,
        line: usize,
        reason: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to build the HTTP client: {0}")]
    HttpClient(#[from] FetchError),

    #[error("Failed to connect to PostgreSQL: {0}")]
    Connection(#[from] ConnectorError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Interrupted by {0}")]
    ShutdownRequested(Signal),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::ShutdownRequested(_) => ExitCode::ShutdownRequested,
            _ => ExitCode::GeneralError,
        }
    }
}
