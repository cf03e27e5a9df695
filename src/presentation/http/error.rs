// src/presentation/http/error.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    validation::{FieldError, ValidationErrors},
};
use crate::domain::errors::DomainError;
use crate::presentation::http::i18n::Locale;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    key: String,
    fields: Vec<FieldError>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Validation(_)
            | ApplicationError::InvalidInput(_)
            | ApplicationError::AlreadyMember(_)
            | ApplicationError::NotMember(_)
            | ApplicationError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_)) => {
                StatusCode::CONFLICT
            }
            ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApplicationError::Infrastructure(_)
            | ApplicationError::Domain(DomainError::Persistence(_)) => {
                error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let fields = match &err {
            ApplicationError::InvalidInput(errors) => errors.iter().cloned().collect(),
            _ => Vec::new(),
        };

        Self {
            status,
            key: err.key().to_string(),
            fields,
        }
    }

    pub fn from_validation(errors: ValidationErrors) -> Self {
        Self::from_error(ApplicationError::InvalidInput(errors))
    }

    pub fn with_status(status: StatusCode, key: impl Into<String>) -> Self {
        Self {
            status,
            key: key.into(),
            fields: Vec::new(),
        }
    }

    pub fn bad_request(key: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, key)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Attached to every error response so the locale middleware can re-render
/// the body in the caller's language.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub key: String,
    pub fields: Vec<FieldError>,
}

impl ErrorDetails {
    pub fn body(&self, status: StatusCode, locale: Locale) -> ErrorResponse {
        ErrorResponse {
            error: status.canonical_reason().unwrap_or("error").to_string(),
            message: locale.message(&self.key).into_owned(),
            errors: self
                .fields
                .iter()
                .map(|field| FieldMessage {
                    field: field.field.to_string(),
                    message: locale.field_message(field),
                })
                .collect(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let details = ErrorDetails {
            key: self.key,
            fields: self.fields,
        };
        let payload = details.body(self.status, Locale::En);
        let mut response = (self.status, Json(payload)).into_response();
        response.extensions_mut().insert(details);
        response
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldMessage>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
