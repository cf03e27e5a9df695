// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, PageDto, UserDto};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub items: Vec<UserDto>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::current_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::update_article_by_id,
        crate::presentation::http::controllers::articles::delete_article_by_id,
        crate::presentation::http::controllers::articles::favorite_article,
        crate::presentation::http::controllers::articles::unfavorite_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::add_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::profiles::get_profile,
        crate::presentation::http::controllers::profiles::follow_user,
        crate::presentation::http::controllers::profiles::unfollow_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            UserListResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::FieldMessage,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::profiles::ProfileResponse,
            crate::presentation::http::controllers::requests::RegisterRequest,
            crate::presentation::http::controllers::requests::LoginRequest,
            crate::presentation::http::controllers::requests::CreateArticleRequest,
            crate::presentation::http::controllers::requests::UpdateArticleRequest,
            crate::presentation::http::controllers::requests::AddCommentRequest,
            crate::presentation::http::controllers::requests::UpdateUserMultipart,
            crate::application::dto::UserDto,
            crate::application::dto::LoginUserDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Account endpoints"),
        (name = "Articles", description = "Articles and favorites"),
        (name = "Comments", description = "Article comments"),
        (name = "Profiles", description = "Public profiles and follows"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Scribe API",
        description = "Blogging backend: articles, comments, favorites and follows",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/api/docs`, document at `/api/openapi.json`.
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/api", get(|| async { axum::response::Redirect::permanent("/api/docs") }))
}

impl From<PageDto<UserDto>> for UserListResponse {
    fn from(page: PageDto<UserDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

impl From<PageDto<ArticleDto>> for ArticleListResponse {
    fn from(page: PageDto<ArticleDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}
