// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{AddCommentCommand, DeleteCommentCommand},
    dto::CommentDto,
    error::ApplicationError,
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::controllers::requests::AddCommentRequest;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, ValidJson};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Comments, newest first.", body = Vec<CommentDto>),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    ValidJson(payload): ValidJson<AddCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    state
        .services
        .comment_commands
        .add_comment(
            &user,
            AddCommentCommand {
                slug,
                body: payload.body,
            },
        )
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}/comments/{id}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted; the removed comment is returned.", body = CommentDto),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article or comment missing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, id)): Path<(String, String)>,
) -> HttpResult<Json<CommentDto>> {
    let comment_id = id
        .parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("comment.not_found")))?;

    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { slug, comment_id })
        .await
        .into_http()
        .map(Json)
}
