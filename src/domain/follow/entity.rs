use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;

/// A directed follower -> followed edge. Self-edges cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowPair {
    follower: UserId,
    following: UserId,
}

impl FollowPair {
    pub fn new(follower: UserId, following: UserId) -> DomainResult<Self> {
        if follower == following {
            return Err(DomainError::Conflict("follow.cannot_follow_self".into()));
        }
        Ok(Self {
            follower,
            following,
        })
    }

    pub fn follower(&self) -> UserId {
        self.follower
    }

    pub fn following(&self) -> UserId {
        self.following
    }
}
