//! Typed errors for the invoice service
//!
//! Two categories matter here: storage failures, which the create/update
//! actions intercept and turn into user-facing messages, and configuration
//! failures, which abort startup. Validation problems are not errors in
//! this sense; they travel as field-keyed data (see
//! [`crate::core::validation`]).

use thiserror::Error;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not establish a connection to the database.
    #[error("failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed to execute.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A persisted value could not be read back into its domain type.
    #[error("could not decode column '{column}': {message}")]
    Decode {
        column: &'static str,
        message: String,
    },

    /// The backend is not accepting calls.
    #[error("storage backend is unavailable")]
    Unavailable,
}

/// Errors raised while reading process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// An environment variable is set to an unusable value.
    #[error("invalid value for {name}: {message}")]
    InvalidEnv {
        name: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Unavailable;
        assert!(err.to_string().contains("unavailable"));

        let err = StoreError::Decode {
            column: "status",
            message: "unknown status 'archived'".to_string(),
        };
        assert!(err.to_string().contains("status"));
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnv("DATABASE_URL");
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
