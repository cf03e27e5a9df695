use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};
use tracing::info;

pub struct RegisterUserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("user.email_taken"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(email, username, password_hash, self.clock.now());
        // A concurrent registration can still win the race; the store's unique
        // constraint surfaces it as the same conflict.
        let user = self.user_repo.insert(new_user).await?;

        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user.into())
    }
}
