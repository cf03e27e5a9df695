use std::sync::Arc;

use crate::domain::{follow::FollowRepository, user::UserRepository};

pub struct ProfileQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
}

impl ProfileQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }
}
