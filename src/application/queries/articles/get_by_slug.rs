use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::ApplicationResult,
    lookup::{ArticleKey, find_article},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = find_article(self.read_repo.as_ref(), &ArticleKey::Slug(query.slug)).await?;
        Ok(article.into())
    }
}
