use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        lookup::{ArticleKey, find_article},
        ownership::ensure_owner,
    },
};
use tracing::info;

pub struct DeleteArticleCommand {
    pub target: ArticleKey,
}

impl ArticleCommandService {
    /// Returns the article as it was before removal.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = find_article(self.read_repo.as_ref(), &command.target).await?;
        ensure_owner(&article, actor, "article.forbidden_delete")?;

        self.write_repo.delete(article.id).await?;
        info!(article_id = %article.id, slug = %article.slug, "article deleted");
        Ok(article.into())
    }
}
