// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Domain failures carry a message key (for example `article.not_found`)
/// that the HTTP layer resolves into a localized message.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(key: impl Into<String>) -> Self {
        Self::Validation(key.into())
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Validation(key) | Self::Conflict(key) | Self::NotFound(key) => key,
            Self::Persistence(_) => "common.internal_error",
        }
    }
}
