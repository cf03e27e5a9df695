use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{follow::FollowRepository, user::UserRepository},
};

pub struct ProfileCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            clock,
        }
    }
}
