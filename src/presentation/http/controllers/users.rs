// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::UpdateUserCommand,
    dto::UserDto,
    ports::storage::{ACCEPTED_IMAGE_TYPES, IMAGE_MAX_BYTES, ImageUpload},
    queries::users::ListUsersQuery,
    validation::Validate,
};
use crate::presentation::http::controllers::requests::{PageParams, UpdateUserForm};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::UserListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Query, multipart::MultipartError},
    http::StatusCode,
};

fn multipart_error(err: MultipartError) -> HttpError {
    let status = err.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        HttpError::with_status(status, "upload.too_large")
    } else {
        HttpError::with_status(status, "upload.invalid_multipart")
    }
}

fn check_image(upload: &ImageUpload) -> HttpResult<()> {
    if upload.bytes.len() > IMAGE_MAX_BYTES {
        return Err(HttpError::bad_request("upload.too_large"));
    }
    let accepted = upload
        .content_type
        .as_deref()
        .is_some_and(|content_type| ACCEPTED_IMAGE_TYPES.contains(&content_type));
    if !accepted {
        return Err(HttpError::bad_request("upload.unsupported_type"));
    }
    Ok(())
}

/// Reads the profile form. Blank credential fields count as absent and an
/// empty file part means no new image.
async fn read_update_form(
    mut multipart: Multipart,
) -> HttpResult<(UpdateUserForm, Option<ImageUpload>)> {
    let mut form = UpdateUserForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;
            if bytes.is_empty() {
                continue;
            }
            let upload = ImageUpload {
                file_name,
                content_type,
                bytes,
            };
            check_image(&upload)?;
            image = Some(upload);
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        let present = (!value.trim().is_empty()).then_some(value);
        match name.as_str() {
            "email" => form.email = present,
            "username" => form.username = present,
            "password" => form.password = present,
            "bio" => form.bio = present,
            _ => {}
        }
    }

    Ok((form, image))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(PageParams),
    responses(
        (status = 200, description = "Users, newest first.", body = UserListResponse),
        (status = 400, description = "Invalid page or limit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<UserListResponse>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/profile",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .current_user(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/users",
    request_body(
        content = crate::presentation::http::controllers::requests::UpdateUserMultipart,
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Profile updated.", body = UserDto),
        (status = 400, description = "Invalid field or image.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Email already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<UserDto>> {
    let (form, image) = read_update_form(multipart).await?;
    form.validate().map_err(HttpError::from_validation)?;

    let command = UpdateUserCommand {
        email: form.email,
        username: form.username,
        password: form.password,
        bio: form.bio,
        image,
    };

    state
        .services
        .user_commands
        .update_user(&user, command)
        .await
        .into_http()
        .map(Json)
}
