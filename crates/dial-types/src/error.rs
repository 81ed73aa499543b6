//! Error types for Dial.

use std::io;

/// Errors produced by the Dial framework.
#[derive(Debug, thiserror::Error)]
pub enum DialError {
    #[error("display error: {0}")]
    Display(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DialError>;
