use super::UserQueryService;
use crate::{
    application::{
        dto::{PageDto, UserDto},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl UserQueryService {
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<PageDto<UserDto>> {
        let request = PageRequest::from_optional(query.page, query.limit)?;
        let page = self.user_repo.list_page(request).await?;
        Ok(PageDto::from_page(page, request))
    }
}
