use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::ApplicationResult,
    lookup::find_user,
};

impl UserQueryService {
    pub async fn current_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = find_user(self.user_repo.as_ref(), actor.id).await?;
        Ok(user.into())
    }
}
