// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError, validation::Validate},
    presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::{HttpError, IntoHttpResult};

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

fn app_state(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| HttpError::from_error(ApplicationError::unauthorized("auth.missing_token")))?;

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .into_http()?;

        Ok(Self(user))
    }
}

/// A present but invalid token is still rejected.
impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts)?;
        let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
            return Ok(Self(None));
        };

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .into_http()?;

        Ok(Self(Some(user)))
    }
}

/// JSON body with axum's rejection mapped onto the error envelope.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::with_status(rejection.status(), "common.invalid_json"))?;
        Ok(Self(value))
    }
}

/// JSON body that has passed its `Validate` checks.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        value.validate().map_err(HttpError::from_validation)?;
        Ok(Self(value))
    }
}
