use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
        lookup::{ArticleKey, find_article},
        ownership::ensure_owner,
    },
    domain::article::{ArticleBody, ArticleDescription, ArticlePatch, ArticleTitle, TagList},
};
use tracing::info;

pub struct UpdateArticleCommand {
    pub target: ArticleKey,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl UpdateArticleCommand {
    fn into_patch(self) -> ApplicationResult<ArticlePatch> {
        Ok(ArticlePatch {
            title: self.title.map(ArticleTitle::new).transpose()?,
            description: self.description.map(ArticleDescription::new).transpose()?,
            body: self.body.map(ArticleBody::new).transpose()?,
            tag_list: self.tag_list.map(TagList::new),
        })
    }
}

impl ArticleCommandService {
    /// Merges the supplied fields into the article. A changed title
    /// regenerates the slug. An empty patch still refreshes `updated_at`.
    /// Ownership is settled before the fields are validated.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = find_article(self.read_repo.as_ref(), &command.target).await?;
        ensure_owner(&article, actor, "article.forbidden_update")?;
        let patch = command.into_patch()?;

        let slug = match &patch.title {
            Some(title) if article.title_changes(&patch) => Some(self.slug_service.slug_for(title)?),
            _ => None,
        };

        article.apply_patch(patch, slug, self.clock.now());
        let saved = self.write_repo.save(&article).await?;
        info!(article_id = %saved.id, slug = %saved.slug, "article updated");
        Ok(saved.into())
    }
}
