use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl ProfileDto {
    pub fn from_user(user: User, following: bool) -> Self {
        Self {
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
            following,
        }
    }
}
