use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        lookup::{ArticleKey, find_article},
    },
    domain::membership::{Insertion, Removal},
};
use tracing::info;

pub struct FavoriteArticleCommand {
    pub slug: String,
}

pub struct UnfavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn favorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = find_article(self.read_repo.as_ref(), &ArticleKey::Slug(command.slug)).await?;

        match self
            .write_repo
            .add_favorite(article.id, actor.id, self.clock.now())
            .await?
        {
            Insertion::Added(updated) => {
                info!(article_id = %updated.id, user_id = %actor.id, "article favorited");
                Ok(updated.into())
            }
            Insertion::AlreadyPresent => {
                Err(ApplicationError::already_member("article.already_favorited"))
            }
        }
    }

    pub async fn unfavorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: UnfavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = find_article(self.read_repo.as_ref(), &ArticleKey::Slug(command.slug)).await?;

        match self
            .write_repo
            .remove_favorite(article.id, actor.id, self.clock.now())
            .await?
        {
            Removal::Removed(updated) => {
                info!(article_id = %updated.id, user_id = %actor.id, "article unfavorited");
                Ok(updated.into())
            }
            Removal::Absent => Err(ApplicationError::not_member("article.not_favorited")),
        }
    }
}
