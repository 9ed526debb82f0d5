//! Error types for the host front-end.
//!
//! Wraps parse failures from the core crate together with the failure modes
//! the host adds: configuration I/O, command dispatch, validation and the
//! platform launcher itself.

use launch_intent_core::{IntentError, ValidationError};
use thiserror::Error;

/// Errors that can occur while handling an `am` command.
#[derive(Debug, Error)]
pub enum HostError {
    /// The launch command could not be parsed.
    #[error(transparent)]
    Intent(#[from] IntentError),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The command line was empty.
    #[error("no arguments given")]
    NoArguments,

    /// The first token names a command other than `start`.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    /// The parsed descriptor failed validation.
    #[error("invalid descriptor: {0}")]
    Invalid(ValidationError),

    /// The platform launcher reported a failure.
    #[error("launch failed: {0}")]
    Launch(String),
}

/// Convenience alias for results with [`HostError`].
pub type Result<T> = std::result::Result<T, HostError>;
