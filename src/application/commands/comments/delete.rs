use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
        lookup::{ArticleKey, find_article, find_user},
        ownership::ensure_owner,
    },
    domain::comment::CommentId,
};
use tracing::info;

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

impl CommentCommandService {
    /// The comment must belong to the addressed article; a comment reached
    /// through another article's slug is reported as missing.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article =
            find_article(self.article_repo.as_ref(), &ArticleKey::Slug(command.slug)).await?;

        let comment_id = CommentId::new(command.comment_id)
            .map_err(|_| ApplicationError::not_found("comment.not_found"))?;
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.belongs_to(article.id))
            .ok_or_else(|| ApplicationError::not_found("comment.not_found"))?;

        ensure_owner(&comment, actor, "comment.forbidden_delete")?;

        let author = find_user(self.user_repo.as_ref(), comment.author_id).await?;
        self.comment_repo.delete(comment.id).await?;

        info!(comment_id = %comment.id, article_id = %article.id, "comment deleted");
        Ok(CommentDto::from_parts(comment, author))
    }
}
