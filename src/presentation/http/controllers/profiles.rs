// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::FollowCommand, dto::ProfileDto, queries::profiles::GetProfileQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

impl From<ProfileDto> for ProfileResponse {
    fn from(profile: ProfileDto) -> Self {
        Self { profile }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/profiles/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Public profile.", body = ProfileResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_queries
        .get_profile(viewer.as_ref(), GetProfileQuery { username })
        .await
        .into_http()
        .map(|profile| Json(profile.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/profiles/{username}/follow",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Now following.", body = ProfileResponse),
        (status = 400, description = "Already following.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Cannot follow yourself.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn follow_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_commands
        .follow(&user, FollowCommand { username })
        .await
        .into_http()
        .map(|profile| Json(profile.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/profiles/{username}/follow",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "No longer following.", body = ProfileResponse),
        (status = 400, description = "Not following.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn unfollow_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_commands
        .unfollow(&user, FollowCommand { username })
        .await
        .into_http()
        .map(|profile| Json(profile.into()))
}
