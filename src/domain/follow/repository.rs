use crate::domain::errors::DomainResult;
use crate::domain::follow::entity::FollowPair;
use crate::domain::membership::{Insertion, Removal};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn is_following(&self, follower: UserId, following: UserId) -> DomainResult<bool>;

    /// Inserts the edge unless it already exists.
    async fn follow(&self, pair: FollowPair, at: DateTime<Utc>) -> DomainResult<Insertion<()>>;

    async fn unfollow(&self, pair: FollowPair) -> DomainResult<Removal<()>>;
}
