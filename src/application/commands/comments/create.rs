use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
        lookup::{ArticleKey, find_article, find_user},
    },
    domain::comment::{CommentBody, NewComment},
};
use tracing::info;

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let body = CommentBody::new(command.body)?;
        let article =
            find_article(self.article_repo.as_ref(), &ArticleKey::Slug(command.slug)).await?;
        let author = find_user(self.user_repo.as_ref(), actor.id).await?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                body,
                article_id: article.id,
                author_id: author.id,
                created_at: self.clock.now(),
            })
            .await?;

        info!(comment_id = %comment.id, article_id = %article.id, author_id = %author.id, "comment created");
        Ok(CommentDto::from_parts(comment, author))
    }
}
