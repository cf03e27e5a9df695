use crate::application::dto::UserDto;
use crate::domain::{comment::Comment, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub author: UserDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentDto {
    pub fn from_parts(comment: Comment, author: User) -> Self {
        Self {
            id: comment.id.into(),
            body: comment.body.into(),
            author: author.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
