//! Tracing setup for hunmin-board.
//!
//! The configured level applies to this crate only; sqlx statement logging
//! has its own level so query traces stay quiet unless asked for. A
//! `RUST_LOG` value replaces both.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{HunminError, Result};

/// Tracing target of this crate's own events.
const CRATE_TARGET: &str = "hunmin_board";

/// Canonical name of a configured level.
pub(crate) fn level_name(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(HunminError::Config(format!("unknown log level: {other:?}"))),
    }
}

/// Filter directives for a logging configuration, e.g.
/// `hunmin_board=debug,sqlx=warn`.
pub fn directives(config: &LoggingConfig) -> Result<String> {
    Ok(format!(
        "{CRATE_TARGET}={},sqlx={}",
        level_name(&config.level)?,
        level_name(&config.sqlx_level)?
    ))
}

fn build_filter(directives: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::builder()
        .parse(directives)
        .map_err(|e| HunminError::Config(format!("invalid log filter {directives:?}: {e}")))
}

/// Open the log file for appending, creating parent directories.
///
/// An empty path disables file output.
fn open_log_file(path: &str) -> Result<Option<File>> {
    if path.is_empty() {
        return Ok(None);
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Some(file))
}

/// Install the global subscriber described by `config`.
///
/// Console output is colored; file output is plain text appended to
/// `config.file`. Fails if neither output is enabled or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.console && config.file.is_empty() {
        return Err(HunminError::Config(
            "logging needs console output or a log file".to_string(),
        ));
    }

    let filter = build_filter(&directives(config)?)?;

    let console_layer = config.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let file_layer = open_log_file(&config.file)?.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| HunminError::Config(format!("logging already initialized: {e}")))
}

/// Console-only logging at `level`, used when `init` fails.
///
/// An unknown level falls back to `info`.
pub fn init_console_only(level: &str) {
    let level = level_name(level).unwrap_or("info");
    let directives = format!("{CRATE_TARGET}={level},sqlx=warn");
    let filter = build_filter(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_level_name() {
        assert_eq!(level_name("TRACE").unwrap(), "trace");
        assert_eq!(level_name(" Debug ").unwrap(), "debug");
        assert_eq!(level_name("warning").unwrap(), "warn");
        assert_eq!(level_name("off").unwrap(), "off");
        assert!(matches!(level_name("verbose"), Err(HunminError::Config(_))));
        assert!(level_name("").is_err());
    }

    #[test]
    fn test_directives_scope_crate_and_sqlx() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            sqlx_level: "WARN".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(directives(&config).unwrap(), "hunmin_board=debug,sqlx=warn");
    }

    #[test]
    fn test_directives_reject_unknown_level() {
        let config = LoggingConfig {
            sqlx_level: "chatty".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(directives(&config), Err(HunminError::Config(_))));
    }

    #[test]
    fn test_directives_parse_as_filter() {
        let directives = directives(&LoggingConfig::default()).unwrap();
        assert!(EnvFilter::builder().parse(&directives).is_ok());
    }

    #[test]
    fn test_open_log_file_creates_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/hunmin.log");
        let path_str = path.to_string_lossy().into_owned();

        let mut file = open_log_file(&path_str).unwrap().unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path_str).unwrap().unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_empty_path_disables_file() {
        assert!(open_log_file("").unwrap().is_none());
    }

    #[test]
    fn test_init_without_outputs_fails() {
        let config = LoggingConfig {
            console: false,
            file: String::new(),
            ..LoggingConfig::default()
        };
        assert!(matches!(init(&config), Err(HunminError::Config(_))));
    }
}
