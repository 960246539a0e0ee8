//! Error handling and custom error types
//!
//! Provides unified error handling across the assistant using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("AI provider error: {0}")]
    AiProvider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
