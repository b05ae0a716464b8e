//! Error types for the board data-access layer.

use thiserror::Error;

/// Common error type for hunmin-board.
#[derive(Error, Debug)]
pub enum HunminError {
    /// Data-access failure.
    ///
    /// Covers connectivity loss, a closed pool, constraint violations and
    /// query errors. Errors from sqlx are converted into this variant.
    #[error("database error: {0}")]
    Database(String),

    /// The connection pool could not be opened.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for HunminError {
    fn from(e: sqlx::Error) -> Self {
        HunminError::Database(e.to_string())
    }
}

/// Result type alias for hunmin-board operations.
pub type Result<T> = std::result::Result<T, HunminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = HunminError::Database("disk I/O error".to_string());
        assert_eq!(err.to_string(), "database error: disk I/O error");
    }

    #[test]
    fn test_validation_error_display() {
        let err = HunminError::Validation("page size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: page size must be positive"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = HunminError::NotFound("board".to_string());
        assert_eq!(err.to_string(), "board not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HunminError = io_err.into();
        assert!(matches!(err, HunminError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: HunminError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, HunminError::Database(_)));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i64> {
            Ok(7)
        }

        fn sample_err() -> Result<i64> {
            Err(HunminError::Config("bad".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 7);
        assert!(sample_err().is_err());
    }
}
