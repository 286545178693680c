use crate::error::CliError;
use std::{collections::HashMap, fs, io, path::Path};

/// Environment variables from the process, supplemented by a `.env` file.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    /// Snapshot of the process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Fills in keys from the `.env` file at `path`. Keys that are already
    /// set are kept. A missing file is not an error.
    pub fn load_dotenv<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, CliError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(source) => {
                return Err(CliError::EnvFileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let parsed = parse_env_content(&content).map_err(|(line, reason)| {
            CliError::EnvFileParse {
                path: path.to_path_buf(),
                line,
                reason,
            }
        })?;

        for (key, value) in parsed {
            self.vars.entry(key).or_insert(value);
        }
        Ok(true)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl From<HashMap<String, String>> for EnvManager {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

/// Parses `KEY=VALUE` lines. Errors carry the 1-based line number.
fn parse_env_content(content: &str) -> Result<Vec<(String, String)>, (usize, &'static str)> {
    let mut pairs = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            return Err((line_num + 1, "expected KEY=VALUE"));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err((line_num + 1, "empty key"));
        }

        pairs.push((key.to_string(), unquote_value(value)));
    }

    Ok(pairs)
}

fn unquote_value(value: &str) -> String {
    let value = value.trim();

    // A quoted value ends at its closing quote; anything after it, such as
    // a trailing comment, is dropped.
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote)
            && let Some(end) = rest.find(quote)
        {
            return rest[..end].to_string();
        }
    }

    // Unquoted values may carry a trailing comment.
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manager(pairs: &[(&str, &str)]) -> EnvManager {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    #[test]
    fn test_parse_basic_env() {
        let content = r#"
# Comment
host=localhost
export port=5433
        "#;

        let parsed = parse_env_content(content).unwrap();
        assert_eq!(
            parsed,
            vec![
                ("host".to_string(), "localhost".to_string()),
                ("port".to_string(), "5433".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_quoted_values() {
        let content = r#"
QUOTED="value with spaces"
SINGLE='single # quoted'
UNQUOTED=plain # trailing comment
        "#;

        let parsed: HashMap<_, _> = parse_env_content(content).unwrap().into_iter().collect();
        assert_eq!(parsed["QUOTED"], "value with spaces");
        assert_eq!(parsed["SINGLE"], "single # quoted");
        assert_eq!(parsed["UNQUOTED"], "plain");
    }

    #[test]
    fn test_quoted_value_with_trailing_comment() {
        let content = "password=\"s3cret\" # prod\nuser='loader' # ops\n";

        let parsed = parse_env_content(content).unwrap();
        assert_eq!(
            parsed,
            vec![
                ("password".to_string(), "s3cret".to_string()),
                ("user".to_string(), "loader".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_env_format() {
        assert_eq!(
            parse_env_content("host=db\nINVALID LINE WITHOUT EQUALS"),
            Err((2, "expected KEY=VALUE"))
        );
        assert_eq!(parse_env_content(" =value"), Err((1, "empty key")));
    }

    #[test]
    fn test_dotenv_does_not_override_existing_vars() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host=from-file\nuser=loader").unwrap();

        let mut env = manager(&[("host", "from-process")]);
        assert!(env.load_dotenv(file.path()).unwrap());

        assert_eq!(env.get("host"), Some("from-process"));
        assert_eq!(env.get("user"), Some("loader"));
    }

    #[test]
    fn test_missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut env = manager(&[("host", "db")]);

        assert!(!env.load_dotenv(dir.path().join(".env")).unwrap());
        assert_eq!(env.all().len(), 1);
    }

    #[test]
    fn test_malformed_dotenv_reports_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header\nnot a pair").unwrap();

        let err = EnvManager::default().load_dotenv(file.path()).unwrap_err();
        assert!(matches!(err, CliError::EnvFileParse { line: 2, .. }));
    }
}
