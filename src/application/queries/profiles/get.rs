use super::ProfileQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::ApplicationResult,
    lookup::find_profile_user,
};

pub struct GetProfileQuery {
    pub username: String,
}

impl ProfileQueryService {
    /// `following` is always false for anonymous viewers.
    pub async fn get_profile(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetProfileQuery,
    ) -> ApplicationResult<ProfileDto> {
        let user = find_profile_user(self.user_repo.as_ref(), &query.username).await?;
        let following = match viewer {
            Some(viewer) if viewer.id != user.id => {
                self.follow_repo.is_following(viewer.id, user.id).await?
            }
            _ => false,
        };
        Ok(ProfileDto::from_user(user, following))
    }
}
