use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::ApplicationResult,
    lookup::{ArticleKey, find_article},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = find_article(self.read_repo.as_ref(), &ArticleKey::Id(query.id)).await?;
        Ok(article.into())
    }
}
