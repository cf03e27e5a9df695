// src/application/validation.rs
//! Field-level input checks run explicitly at the request boundary.

use crate::domain::user::value_objects::is_email_shaped;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    Required,
    TooLong,
    TooShort,
    InvalidEmail,
    InvalidValue,
}

impl FieldErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooLong => "too_long",
            Self::TooShort => "too_short",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidValue => "invalid_value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub code: FieldErrorCode,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, code: FieldErrorCode, limit: Option<usize>) {
        self.0.push(FieldError { field, code, limit });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn has(&self, field: &str, code: FieldErrorCode) -> bool {
        self.0.iter().any(|e| e.field == field && e.code == code)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Non-blank text.
    pub fn require(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, FieldErrorCode::Required, None);
        }
        self
    }

    /// Non-blank text of at most `max` characters.
    pub fn require_max(&mut self, field: &'static str, value: &str, max: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, FieldErrorCode::Required, None);
        } else {
            self.max_chars(field, value, max);
        }
        self
    }

    pub fn max_chars(&mut self, field: &'static str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, FieldErrorCode::TooLong, Some(max));
        }
        self
    }

    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.push(field, FieldErrorCode::TooShort, Some(min));
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, FieldErrorCode::Required, None);
        } else if !is_email_shaped(value.trim()) {
            self.push(field, FieldErrorCode::InvalidEmail, None);
        }
        self
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {}", err.field, err.code.as_str())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Implemented by request payloads that need checking before use.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_failing_field() {
        let mut errors = ValidationErrors::new();
        errors
            .require_max("title", "", 50)
            .require_max("body", &"x".repeat(256), 255)
            .email("email", "nope")
            .min_chars("password", "123", 6);

        assert_eq!(errors.len(), 4);
        assert!(errors.has("title", FieldErrorCode::Required));
        assert!(errors.has("body", FieldErrorCode::TooLong));
        assert!(errors.has("email", FieldErrorCode::InvalidEmail));
        assert!(errors.has("password", FieldErrorCode::TooShort));
        assert_eq!(
            errors.to_string(),
            "title: required, body: too_long, email: invalid_email, password: too_short"
        );
    }

    #[test]
    fn empty_collection_is_ok() {
        let mut errors = ValidationErrors::new();
        errors.require("body", "hello").max_chars("body", "hello", 10);
        assert!(errors.into_result().is_ok());
    }
}
