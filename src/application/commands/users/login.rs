use super::UserCommandService;
use crate::{
    application::{
        dto::{LoginResultDto, LoginUserDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

const INVALID_CREDENTIALS: &str = "auth.invalid_credentials";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Unknown emails and wrong passwords fail identically.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResultDto> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let token = self.token_manager.issue(TokenSubject::from(&user)).await?;

        Ok(LoginResultDto {
            user: LoginUserDto {
                id: user.id.into(),
                username: user.username.into(),
            },
            token,
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let email =
            Email::new(email).map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        Ok(user)
    }
}
