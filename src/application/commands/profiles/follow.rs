use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
        lookup::find_profile_user,
    },
    domain::{
        follow::FollowPair,
        membership::{Insertion, Removal},
    },
};
use tracing::info;

pub struct FollowCommand {
    pub username: String,
}

impl ProfileCommandService {
    /// Following yourself is a conflict and leaves no edge behind.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        command: FollowCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = find_profile_user(self.user_repo.as_ref(), &command.username).await?;
        let pair = FollowPair::new(actor.id, target.id)?;

        match self.follow_repo.follow(pair, self.clock.now()).await? {
            Insertion::Added(()) => {
                info!(follower_id = %actor.id, following_id = %target.id, "user followed");
                Ok(ProfileDto::from_user(target, true))
            }
            Insertion::AlreadyPresent => {
                Err(ApplicationError::already_member("follow.already_following"))
            }
        }
    }

    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        command: FollowCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = find_profile_user(self.user_repo.as_ref(), &command.username).await?;
        let pair = FollowPair::new(actor.id, target.id)
            .map_err(|_| ApplicationError::not_member("follow.not_following"))?;

        match self.follow_repo.unfollow(pair).await? {
            Removal::Removed(()) => {
                info!(follower_id = %actor.id, following_id = %target.id, "user unfollowed");
                Ok(ProfileDto::from_user(target, false))
            }
            Removal::Absent => Err(ApplicationError::not_member("follow.not_following")),
        }
    }
}
