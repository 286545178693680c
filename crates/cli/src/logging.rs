use crate::{error::CliError, settings::LogSettings};
use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

/// Opens `path` for appending, creating it when needed.
pub fn open_log_file(path: &Path) -> Result<File, CliError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CliError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global subscriber writing plain-text lines to the log file.
pub fn init(settings: &LogSettings) -> Result<(), CliError> {
    let file = open_log_file(&settings.file)?;
    let filter = EnvFilter::try_new(&settings.filter)
        .map_err(|e| CliError::Logging(format!("invalid filter '{}': {e}", settings.filter)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};

    #[test]
    fn test_log_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.log");

        writeln!(open_log_file(&path).unwrap(), "first run").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second run").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first run\nsecond run\n");
    }

    #[test]
    fn test_unwritable_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("script.log");

        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, CliError::LogFile { .. }));
    }
}
