// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConciergeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to load responses: {0}")]
    RulesLoad(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ConciergeError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ConciergeError::Config(msg.into())
    }

    pub fn rules_error(msg: impl Into<String>) -> Self {
        ConciergeError::RulesLoad(msg.into())
    }
}

pub type ConciergeResult<T> = Result<T, ConciergeError>;
