use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
        lookup::find_user,
        ports::storage::ImageUpload,
    },
    domain::user::{Email, PasswordHash, User, UserUpdate, Username},
};
use tracing::{info, warn};

#[derive(Default)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<ImageUpload>,
}

impl UserCommandService {
    /// Applies a partial profile update for the acting user. A newly uploaded
    /// image replaces the previous one, which is removed once the row is saved.
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let user = find_user(self.user_repo.as_ref(), actor.id).await?;
        let mut update = UserUpdate::new(user.id, self.clock.now());

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            self.ensure_email_available(&user, &email).await?;
            update = update.with_email(email);
        }

        if let Some(username) = command.username {
            update = update.with_username(Username::new(username)?);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }

        let new_image = match command.image {
            Some(upload) => Some(self.image_storage.store(upload).await?),
            None => None,
        };
        if let Some(url) = &new_image {
            update = update.with_image(url.clone());
        }

        let saved = match self.user_repo.update(update).await {
            Ok(saved) => saved,
            Err(err) => {
                if let Some(url) = &new_image {
                    self.discard_image(url).await;
                }
                return Err(err.into());
            }
        };

        if new_image.is_some() {
            if let Some(previous) = user.image.as_deref() {
                self.discard_image(previous).await;
            }
        }

        info!(user_id = %saved.id, "user updated");
        Ok(saved.into())
    }

    async fn ensure_email_available(&self, user: &User, email: &Email) -> ApplicationResult<()> {
        if &user.email == email {
            return Ok(());
        }
        match self.user_repo.find_by_email(email).await? {
            Some(other) if other.id != user.id => {
                Err(ApplicationError::conflict("user.email_taken"))
            }
            _ => Ok(()),
        }
    }

    async fn discard_image(&self, url: &str) {
        if let Err(err) = self.image_storage.delete(url).await {
            warn!(error = %err, url, "failed to delete stored image");
        }
    }
}
