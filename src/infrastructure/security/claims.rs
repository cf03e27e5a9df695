// src/infrastructure/security/claims.rs
use crate::application::{
    dto::TokenSubject,
    error::{ApplicationError, ApplicationResult},
    ports::security::VerifiedToken,
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuilds the token subject from the authority block facts.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<VerifiedToken> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(&fact.predicate);
    }
    ctx.into_verified()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    email: Option<String>,
    username: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(predicate),
            "issued_at" => self.issued_at = first_date(predicate),
            "expires_at" => self.expires_at = first_date(predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        if let [Term::Integer(id), Term::Str(email), Term::Str(username)] =
            predicate.terms.as_slice()
        {
            self.user_id = Some(*id);
            self.email = Some(email.clone());
            self.username = Some(username.clone());
        }
    }

    fn into_verified(self) -> ApplicationResult<VerifiedToken> {
        let missing = || ApplicationError::unauthorized("auth.invalid_token");

        let user_id = UserId::new(self.user_id.ok_or_else(missing)?).map_err(|_| missing())?;
        Ok(VerifiedToken {
            subject: TokenSubject {
                user_id,
                email: self.email.ok_or_else(missing)?,
                username: self.username.ok_or_else(missing)?,
            },
            issued_at: DateTime::<Utc>::from(self.issued_at.ok_or_else(missing)?),
            expires_at: DateTime::<Utc>::from(self.expires_at.ok_or_else(missing)?),
        })
    }
}

fn first_date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}
