// src/application/lookup.rs
//! Find-or-fail helpers shared by command and query services.

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleSlug},
        user::{User, UserId, UserRepository, Username},
    },
};

/// How a caller addresses an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleKey {
    Slug(String),
    Id(i64),
}

pub async fn find_article(
    repo: &dyn ArticleReadRepository,
    key: &ArticleKey,
) -> ApplicationResult<Article> {
    let found = match key {
        ArticleKey::Slug(slug) => {
            let slug = ArticleSlug::new(slug.as_str())
                .map_err(|_| ApplicationError::not_found("article.not_found"))?;
            repo.find_by_slug(&slug).await?
        }
        ArticleKey::Id(id) => {
            let id = ArticleId::new(*id)
                .map_err(|_| ApplicationError::not_found("article.not_found"))?;
            repo.find_by_id(id).await?
        }
    };
    found.ok_or_else(|| ApplicationError::not_found("article.not_found"))
}

pub async fn find_user(repo: &dyn UserRepository, id: UserId) -> ApplicationResult<User> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("user.not_found"))
}

pub async fn find_profile_user(
    repo: &dyn UserRepository,
    username: &str,
) -> ApplicationResult<User> {
    let username =
        Username::new(username).map_err(|_| ApplicationError::not_found("profile.not_found"))?;
    repo.find_by_username(&username)
        .await?
        .ok_or_else(|| ApplicationError::not_found("profile.not_found"))
}
