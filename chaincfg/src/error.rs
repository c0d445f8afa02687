//! Unified error types for chaincfg.

use thiserror::Error;

/// Top-level error type for the chaincfg tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// A chain identifier outside the supported set was supplied.
    ///
    /// Unlike missing endpoint or signer variables, this is a defect in the
    /// caller's input and is never silently defaulted.
    #[error("unknown chain '{0}'")]
    UnknownChain(String),

    /// Composed configuration could not be encoded as JSON.
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::Config`] from a plain message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`Error::Config`] from a message plus an underlying cause.
    pub fn config_with(msg: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {source}", msg.into()))
    }
}
