//! Error types for `ringside`.
//!
//! Only configuration problems surface as errors. A command sent to the
//! engine in a state that forbids it (a stray tick after pause, toggling an
//! expired clock) is not an error at all: the engine applies it as a no-op
//! and returns the unchanged snapshot, because such commands arise naturally
//! from slightly stale callers.

use thiserror::Error;

use crate::bout::Side;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `ringside` CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (empty name, invalid duration)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (terminal read/write failure)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `ringside` operations.
#[derive(Debug, Error)]
pub enum RingsideError {
    /// Match configuration was rejected by the resolver
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RingsideError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Validation errors raised by the match resolver.
///
/// These are surfaced to the operator verbatim; nothing is silently
/// coerced except the range clamping the input layer performs before the
/// resolver ever sees a duration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A competitor name was empty or whitespace-only
    #[error("{side} corner name must not be empty")]
    EmptyName {
        /// Corner whose name was rejected
        side: Side,
    },

    /// Round duration was not a positive number of seconds
    #[error("round duration must be positive, got {seconds}s")]
    InvalidDuration {
        /// The rejected value
        seconds: u32,
    },
}

/// Result type alias for `ringside` operations.
pub type Result<T> = std::result::Result<T, RingsideError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
        assert_eq!(ExitCode::INTERRUPTED, 130);
        assert_eq!(ExitCode::TERMINATED, 143);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: RingsideError = ConfigError::EmptyName { side: Side::Red }.into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: RingsideError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_empty_name_display() {
        let err = ConfigError::EmptyName { side: Side::Blue };
        assert_eq!(err.to_string(), "blue corner name must not be empty");
    }

    #[test]
    fn test_invalid_duration_display() {
        let err = ConfigError::InvalidDuration { seconds: 0 };
        assert!(err.to_string().contains("0s"));
    }
}
