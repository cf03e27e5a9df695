// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use scribe_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager, VerifiedToken},
};
use scribe_core::domain::user::UserId;

pub const EXPIRED_TOKEN: &str = "expired-token";
const TOKEN_PREFIX: &str = "token-";
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Token string the dummy manager issues for a user id.
pub fn token_for(user_id: i64) -> String {
    format!("{TOKEN_PREFIX}{user_id}")
}

/* -------------------------------- TokenManager -------------------------------- */

/// Issues `token-<id>` and accepts it back. The user behind it is still
/// loaded from the repository, so deleted users fail authentication.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id.into()),
            issued_at: now,
            expires_at: now + Duration::seconds(TOKEN_TTL_SECS),
            expires_in: TOKEN_TTL_SECS,
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken> {
        let invalid = || ApplicationError::unauthorized("auth.invalid_token");
        if token == EXPIRED_TOKEN {
            return Err(invalid());
        }
        let id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(invalid)?;
        let user_id = UserId::new(id).map_err(|_| invalid())?;

        let now = super::time::fixed_now();
        Ok(VerifiedToken {
            subject: TokenSubject {
                user_id,
                email: String::new(),
                username: String::new(),
            },
            issued_at: now,
            expires_at: now + Duration::seconds(TOKEN_TTL_SECS),
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Hashes to `hash::<password>` and only verifies exact matches.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

pub fn strict_hash(password: &str) -> String {
    format!("hash::{password}")
}

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(strict_hash(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if strict_hash(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("auth.invalid_credentials"))
        }
    }
}
