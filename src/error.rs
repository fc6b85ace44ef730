//! Unified error handling
//!
//! Domain-specific errors live next to their modules ([`FetchError`] in
//! `fetch`, [`ScriptError`] in `resolve::script`); this module folds them
//! into one crate-level [`Error`] for use across module boundaries.
//!
//! The request path itself barely fails: a resolution miss is the
//! 未知频道 sentinel, missing guide data becomes the default schedule,
//! and malformed dates degrade to empty fields. Errors here belong
//! almost entirely to the background fetch task, which swallows and
//! retries them.

use std::io;
use thiserror::Error;

pub use crate::fetch::FetchError;
pub use crate::resolve::script::ScriptError;

/// Unified error type for the zhinan crate
#[derive(Error, Debug)]
pub enum Error {
    /// Guide fetch errors (transport, status, parse)
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Script conversion errors
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Fetch(_) => true,
            Self::Script(_) => true,
            Self::Io(_) => true,
            Self::Json(_) => false,
            Self::Config(_) => false,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
