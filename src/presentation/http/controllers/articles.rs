// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand,
        UnfavoriteArticleCommand, UpdateArticleCommand,
    },
    dto::ArticleDto,
    error::ApplicationError,
    lookup::ArticleKey,
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::controllers::requests::{
    CreateArticleRequest, PageParams, UpdateArticleRequest,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, ValidJson};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

/// Non-numeric ids cannot name an article.
fn article_id(raw: &str) -> HttpResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("article.not_found")))
}

fn update_command(target: ArticleKey, payload: UpdateArticleRequest) -> UpdateArticleCommand {
    UpdateArticleCommand {
        target,
        title: payload.title,
        description: payload.description,
        body: payload.body,
        tag_list: payload.tag_list,
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(PageParams),
    responses(
        (status = 200, description = "Articles, newest first.", body = ArticleListResponse),
        (status = 400, description = "Invalid page or limit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug collision.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ValidJson(payload): ValidJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        description: payload.description,
        body: payload.body,
        tag_list: payload.tag_list,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article found.", body = ArticleDto),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "A supplied field is invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(&user, update_command(ArticleKey::Slug(slug), payload))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article deleted; the removed article is returned.", body = ArticleDto),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .delete_article(
            &user,
            DeleteArticleCommand {
                target: ArticleKey::Slug(slug),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-id/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article found.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_id(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let id = article_id(&id)?;
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/by-id/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "A supplied field is invalid.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article_by_id(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let target = ArticleKey::Id(article_id(&id)?);
    state
        .services
        .article_commands
        .update_article(&user, update_command(target, payload))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/by-id/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted; the removed article is returned.", body = ArticleDto),
        (status = 403, description = "Not the author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article_by_id(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let target = ArticleKey::Id(article_id(&id)?);
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { target })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article favorited.", body = ArticleDto),
        (status = 400, description = "Already favorited.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .favorite_article(&user, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Favorite removed.", body = ArticleDto),
        (status = 400, description = "Not favorited.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unfavorite_article(&user, UnfavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(Json)
}
