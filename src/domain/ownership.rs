// src/domain/ownership.rs
use crate::domain::user::UserId;

/// Anything with a single owning user.
pub trait OwnedResource {
    fn owner_id(&self) -> UserId;
}

pub struct IsOwnedBy<'a, R: OwnedResource + ?Sized> {
    resource: &'a R,
    user_id: UserId,
}

impl<'a, R: OwnedResource + ?Sized> IsOwnedBy<'a, R> {
    pub fn new(resource: &'a R, user_id: UserId) -> Self {
        Self { resource, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.resource.owner_id() == self.user_id
    }
}
