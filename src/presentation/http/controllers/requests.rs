// src/presentation/http/controllers/requests.rs
//! Request payloads and their boundary checks.

use crate::application::{
    commands::users::MIN_PASSWORD_LENGTH,
    validation::{Validate, ValidationErrors},
};
use crate::domain::{
    article::value_objects::{BODY_MAX_CHARS, TITLE_MAX_CHARS},
    user::value_objects::USERNAME_MAX_CHARS,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, default 1.
    pub page: Option<u32>,
    /// Items per page, 1 to 100, default 20.
    pub limit: Option<u32>,
}

// Required strings default to empty so a missing field is reported as a
// field error instead of a JSON rejection.

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .email("email", &self.email)
            .require_max("username", &self.username, USERNAME_MAX_CHARS)
            .require("password", &self.password);
        if !self.password.trim().is_empty() {
            errors.min_chars("password", &self.password, MIN_PASSWORD_LENGTH);
        }
        errors.into_result()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require("email", &self.email)
            .require("password", &self.password);
        errors.into_result()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

impl Validate for CreateArticleRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_max("title", &self.title, TITLE_MAX_CHARS)
            .require("description", &self.description)
            .require_max("body", &self.body, BODY_MAX_CHARS);
        errors.into_result()
    }
}

/// Absent fields are left untouched. Field limits are enforced by the
/// update command once the author check has passed.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub body: String,
}

impl Validate for AddCommentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("body", &self.body);
        errors.into_result()
    }
}

/// Text parts of the multipart profile update. The image part is checked
/// separately while the form is read.
#[derive(Debug, Default)]
pub struct UpdateUserForm {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
}

impl Validate for UpdateUserForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(email) = &self.email {
            errors.email("email", email);
        }
        if let Some(username) = &self.username {
            errors.require_max("username", username, USERNAME_MAX_CHARS);
        }
        if let Some(password) = &self.password {
            errors.min_chars("password", password, MIN_PASSWORD_LENGTH);
        }
        errors.into_result()
    }
}

/// OpenAPI shape of the multipart profile update.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UpdateUserMultipart {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
