use crate::application::validation::ValidationErrors;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application failures. Every variant except `Infrastructure` and
/// `InvalidInput` carries a message key, for example `article.not_found`.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid input: {0}")]
    InvalidInput(ValidationErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("already a member: {0}")]
    AlreadyMember(String),

    #[error("not a member: {0}")]
    NotMember(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(key: impl Into<String>) -> Self {
        Self::Validation(key.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn conflict(key: impl Into<String>) -> Self {
        Self::Conflict(key.into())
    }

    pub fn already_member(key: impl Into<String>) -> Self {
        Self::AlreadyMember(key.into())
    }

    pub fn not_member(key: impl Into<String>) -> Self {
        Self::NotMember(key.into())
    }

    pub fn unauthorized(key: impl Into<String>) -> Self {
        Self::Unauthorized(key.into())
    }

    pub fn forbidden(key: impl Into<String>) -> Self {
        Self::Forbidden(key.into())
    }

    pub fn infrastructure(detail: impl Into<String>) -> Self {
        Self::Infrastructure(detail.into())
    }

    /// Message key for the client. Infrastructure details never leak.
    pub fn key(&self) -> &str {
        match self {
            Self::Domain(err) => err.key(),
            Self::InvalidInput(_) => "common.validation_failed",
            Self::Infrastructure(_) => "common.internal_error",
            Self::Validation(key)
            | Self::NotFound(key)
            | Self::Conflict(key)
            | Self::AlreadyMember(key)
            | Self::NotMember(key)
            | Self::Unauthorized(key)
            | Self::Forbidden(key) => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_detail_is_not_exposed_as_key() {
        let err = ApplicationError::infrastructure("connection refused at 10.0.0.3");
        assert_eq!(err.key(), "common.internal_error");
        let err = ApplicationError::from(DomainError::Persistence("deadlock".into()));
        assert_eq!(err.key(), "common.internal_error");
    }

    #[test]
    fn domain_key_passes_through() {
        let err = ApplicationError::from(DomainError::NotFound("article.not_found".into()));
        assert_eq!(err.key(), "article.not_found");
    }
}
