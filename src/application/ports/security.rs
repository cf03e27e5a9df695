// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Fails with `Unauthorized` when the password does not match.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Claims recovered from a verified token, before the user row is loaded.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub subject: TokenSubject,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken>;
}
