// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            username,
            password_hash,
            created_at,
        }
    }
}

/// Partial profile update. `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: Option<Email>,
    pub username: Option<Username>,
    pub password_hash: Option<PasswordHash>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: None,
            username: None,
            password_hash: None,
            bio: None,
            image: None,
            updated_at,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password_hash.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}

impl User {
    /// Applies an update in memory, mirroring what the store persists.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password_hash) = update.password_hash {
            self.password_hash = password_hash;
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        self.updated_at = update.updated_at;
    }
}
