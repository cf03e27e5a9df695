// src/application/ownership.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::ownership::{IsOwnedBy, OwnedResource},
};

/// Rejects with `Forbidden(forbidden_key)` unless `actor` owns `resource`.
pub fn ensure_owner<R: OwnedResource + ?Sized>(
    resource: &R,
    actor: &AuthenticatedUser,
    forbidden_key: &str,
) -> ApplicationResult<()> {
    if IsOwnedBy::new(resource, actor.id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(forbidden_key))
    }
}
