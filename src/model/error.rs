//! Error types for the tcalc application.
//!
//! The calculator core never errors: invalid input is a silent no-op and
//! non-finite arithmetic results are displayed, not raised. Everything
//! here belongs to the host shell (configuration, logging setup, and the
//! terminal) and composes into [`AppError`] via `From` so startup code
//! can propagate with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level application error.
///
/// Returned from startup and the event loop. All variants are fatal: the
/// terminal is restored and the process exits with the error message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber setup failed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error from the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_from_config_error() {
        let config_err = ConfigError::InvalidKeySpec {
            action: "quit",
            spec: "ctrl+".to_string(),
        };
        let app_err: AppError = config_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("ctrl+"));
    }

    #[test]
    fn app_error_from_logging_error() {
        let app_err: AppError = LoggingError::SubscriberAlreadySet.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Logging error"));
    }
}
