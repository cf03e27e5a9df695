// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            profiles::ProfileCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::ImageStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::CommentRepository,
        follow::FollowRepository,
        user::UserRepository,
    },
};

/// Repositories the services are built from.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub follows: Arc<dyn FollowRepository>,
}

/// Infrastructure adapters behind the application ports.
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    user_repo: Arc<dyn UserRepository>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters) -> Self {
        let Repositories {
            users,
            article_writes,
            article_reads,
            comments,
            follows,
        } = repos;
        let Adapters {
            password_hasher,
            token_manager,
            image_storage,
            clock,
            slugger,
        } = adapters;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&users),
            password_hasher,
            Arc::clone(&token_manager),
            image_storage,
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&users)));

        let slug_service = Arc::new(ArticleSlugService::new(slugger, Arc::clone(&clock)));
        let article_commands = Arc::new(ArticleCommandService::new(
            article_writes,
            Arc::clone(&article_reads),
            slug_service,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_reads)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comments),
            Arc::clone(&article_reads),
            Arc::clone(&users),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            comments,
            article_reads,
            Arc::clone(&users),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&users),
            Arc::clone(&follows),
            clock,
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&users), follows));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            profile_commands,
            profile_queries,
            user_repo: users,
            token_manager,
        }
    }

    /// Verifies a raw bearer token and confirms its subject still exists.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let verified = self.token_manager.verify(token).await?;
        let user = self
            .user_repo
            .find_by_id(verified.subject.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("auth.user_not_found"))?;

        Ok(AuthenticatedUser {
            id: user.id,
            email: user.email.into(),
            username: user.username.into(),
            issued_at: verified.issued_at,
            expires_at: verified.expires_at,
        })
    }
}
