use crate::application::error::{ApplicationError, ApplicationResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation("user.password_too_short"));
    }
    Ok(())
}
