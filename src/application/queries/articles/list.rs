use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PageDto},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        let request = PageRequest::from_optional(query.page, query.limit)?;
        let page = self.read_repo.list_page(request).await?;
        Ok(PageDto::from_page(page, request))
    }
}
