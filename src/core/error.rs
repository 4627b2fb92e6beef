//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitIndicatorError`] which covers every fallible internal
//! operation of git-indicators. The indicator contract itself never fails: command
//! failures are flattened to "no information" by the runner and the cache, so these
//! errors only surface from the runner's `try_run`, configuration loading and the CLI.
//!
//! # Public API
//! - [`GitIndicatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitIndicatorError>`
//!
//! # Error Categories
//! - **External commands**: Spawn failures, non-zero exits, empty output
//! - **Repository**: Path is not inside a git working tree
//! - **Configuration**: Unreadable or malformed config files
//! - **File operations**: I/O and JSON errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-indicators
#[derive(Error, Debug)]
pub enum GitIndicatorError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    // External command errors
    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with status {code}")]
    CommandExited { command: String, code: i32 },

    #[error("Command '{command}' produced no output")]
    EmptyOutput { command: String },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // File operation errors
    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitIndicatorError
pub type Result<T> = std::result::Result<T, GitIndicatorError>;

impl GitIndicatorError {
    /// Create a command spawn error
    pub fn command_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandSpawn {
            command: command.into(),
            source,
        }
    }

    /// Create a command exited error. Processes killed by a signal report -1.
    pub fn command_exited(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::CommandExited {
            command: command.into(),
            code: code.unwrap_or(-1),
        }
    }

    /// Create an empty output error
    pub fn empty_output(command: impl Into<String>) -> Self {
        Self::EmptyOutput {
            command: command.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }
}
