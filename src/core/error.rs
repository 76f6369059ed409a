//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch translations for '{code}': HTTP {status}")]
    Fetch { code: String, status: u16 },

    #[error("Invalid translation table: {0}")]
    InvalidTable(String),

    #[error("No async runtime available to fetch translations")]
    NoRuntime,
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
