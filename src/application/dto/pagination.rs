use crate::domain::pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> PageDto<T> {
    pub fn from_page<S>(page: Page<S>, request: PageRequest) -> Self
    where
        S: Into<T>,
    {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
            page: request.page(),
            limit: request.limit(),
        }
    }
}
