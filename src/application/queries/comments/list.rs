use std::collections::HashMap;

use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        lookup::{ArticleKey, find_article},
    },
    domain::user::{User, UserId},
};

pub struct ListCommentsQuery {
    pub slug: String,
}

impl CommentQueryService {
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let article =
            find_article(self.article_repo.as_ref(), &ArticleKey::Slug(query.slug)).await?;
        let comments = self.comment_repo.list_by_article(article.id).await?;

        let mut authors: HashMap<UserId, User> = HashMap::new();
        let mut items = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = match authors.get(&comment.author_id) {
                Some(author) => author.clone(),
                None => {
                    let author = self
                        .user_repo
                        .find_by_id(comment.author_id)
                        .await?
                        .ok_or_else(|| ApplicationError::not_found("user.not_found"))?;
                    authors.insert(author.id, author.clone());
                    author
                }
            };
            items.push(CommentDto::from_parts(comment, author));
        }
        Ok(items)
    }
}
