use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. The password hash never leaves the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}
