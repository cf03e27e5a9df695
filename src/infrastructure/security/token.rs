// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::{TokenManager, VerifiedToken},
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const ACCESS_TOKEN_CODE: &str = r#"
    user({uid}, {email}, {uname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

/// Ed25519-signed Biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn build_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("email".to_string(), subject.email.clone().into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(ACCESS_TOKEN_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn invalid_token<E>(_: E) -> ApplicationError {
    ApplicationError::unauthorized("auth.invalid_token")
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|d| d.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let token = build_and_serialize_biscuit(
            build_params(&subject, issued_at, expires_at),
            self.root.as_ref(),
        )?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken> {
        let biscuit = Biscuit::from_base64(token, self.public).map_err(invalid_token)?;

        // the token's own time checks reject expired tokens here
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .policy("allow if true")
            .map_err(invalid_token)?
            .build(&biscuit)
            .map_err(invalid_token)?;
        authorizer.authorize().map_err(invalid_token)?;

        let view = biscuit.authorizer().map_err(invalid_token)?;
        let (facts, _, _, _) = view.dump();
        parse_claims(facts)
    }
}
