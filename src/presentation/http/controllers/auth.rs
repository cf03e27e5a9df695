// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{LoginUserDto, UserDto},
};
use crate::presentation::http::controllers::requests::{LoginRequest, RegisterRequest};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ValidJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: LoginUserDto,
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = UserDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Email already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        email: payload.email,
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(|user| (StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in.", body = LoginResponse),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        user: result.user,
        access_token: result.token.token,
        token_type: "Bearer".into(),
        expires_in: result.token.expires_in,
        expires_at: result.token.expires_at,
    }))
}
