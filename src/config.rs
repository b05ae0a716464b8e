//! Configuration module for hunmin-board.

use serde::Deserialize;
use std::path::Path;

use crate::page::PageRequest;
use crate::{HunminError, Result};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait for a free connection before failing.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

fn default_db_path() -> String {
    "data/hunmin.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Level for sqlx statement logging.
    #[serde(default = "default_sqlx_log_level")]
    pub sqlx_level: String,
    /// Write log lines to stdout.
    #[serde(default = "default_log_console")]
    pub console: bool,
    /// Path to the log file; empty disables file output.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sqlx_log_level() -> String {
    "warn".to_string()
}

fn default_log_console() -> bool {
    true
}

fn default_log_file() -> String {
    "logs/hunmin.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            sqlx_level: default_sqlx_log_level(),
            console: default_log_console(),
            file: default_log_file(),
        }
    }
}

/// Pagination defaults applied to caller-supplied page descriptors.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not give one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Upper bound for any requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

fn default_page_size() -> u32 {
    5
}

fn default_max_page_size() -> u32 {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginationConfig {
    /// Build a page request from raw caller input.
    ///
    /// A missing size falls back to `default_page_size`; any size is capped
    /// at `max_page_size`. A size of zero is rejected.
    pub fn request(&self, page: u32, size: Option<u32>) -> Result<PageRequest> {
        let size = size.unwrap_or(self.default_page_size);
        PageRequest::new(page, size.min(self.max_page_size))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Pagination configuration.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(HunminError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| HunminError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HUNMIN_DATABASE_PATH`: Override the database file path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("HUNMIN_DATABASE_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::logging::directives(&self.logging)?;
        if !self.logging.console && self.logging.file.is_empty() {
            return Err(HunminError::Config(
                "logging needs console output or a log file".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(HunminError::Config(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.pagination.max_page_size == 0 {
            return Err(HunminError::Config(
                "pagination.max_page_size must be at least 1".to_string(),
            ));
        }
        if self.pagination.default_page_size == 0
            || self.pagination.default_page_size > self.pagination.max_page_size
        {
            return Err(HunminError::Config(format!(
                "pagination.default_page_size must be between 1 and {}",
                self.pagination.max_page_size
            )));
        }
        Ok(())
    }
}
