use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::membership::{Insertion, Removal};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Persists every mutable field of `article` and returns the stored row.
    async fn save(&self, article: &Article) -> DomainResult<Article>;

    /// Removes the article together with its comments and favorites.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Adds `user_id` to the favoriting set and refreshes the counter in one
    /// atomic step. Fails with `NotFound` when the article is gone.
    async fn add_favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Insertion<Article>>;

    async fn remove_favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Removal<Article>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Newest first.
    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<Article>>;
}
