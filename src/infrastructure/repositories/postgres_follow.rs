use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::follow::{FollowPair, FollowRepository};
use crate::domain::membership::{Insertion, Removal};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn is_following(&self, follower: UserId, following: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM user_follows WHERE follower_id = $1 AND following_id = $2
             )",
        )
        .bind(i64::from(follower))
        .bind(i64::from(following))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn follow(&self, pair: FollowPair, at: DateTime<Utc>) -> DomainResult<Insertion<()>> {
        let inserted = sqlx::query(
            "INSERT INTO user_follows (follower_id, following_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT user_follows_pair_key DO NOTHING",
        )
        .bind(i64::from(pair.follower()))
        .bind(i64::from(pair.following()))
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        Ok(if inserted == 0 {
            Insertion::AlreadyPresent
        } else {
            Insertion::Added(())
        })
    }

    async fn unfollow(&self, pair: FollowPair) -> DomainResult<Removal<()>> {
        let removed = sqlx::query(
            "DELETE FROM user_follows WHERE follower_id = $1 AND following_id = $2",
        )
        .bind(i64::from(pair.follower()))
        .bind(i64::from(pair.following()))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        Ok(if removed == 0 {
            Removal::Absent
        } else {
            Removal::Removed(())
        })
    }
}
