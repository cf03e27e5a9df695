use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub body: String,
    pub slug: String,
    pub tag_list: Vec<String>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            description: article.description.into(),
            body: article.body.into(),
            slug: article.slug.into(),
            tag_list: article.tag_list.into(),
            favorited: article.favorited,
            favorites_count: article.favorites_count,
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
