use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleReadRepository, comment::CommentRepository, user::UserRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            user_repo,
            clock,
        }
    }
}
