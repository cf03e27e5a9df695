// src/presentation/http/routes.rs
use crate::application::ports::storage::IMAGE_MAX_BYTES;
use crate::infrastructure::storage::mount_path;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, comments, profiles, users},
    middleware::{
        locale::localize_errors,
        rate_limit::{RateLimit, api_rate_limit_layer},
    },
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware::from_fn,
    routing::{get, post, put},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::warn;

/// Multipart framing on top of the image itself.
const UPLOAD_BODY_LIMIT: usize = IMAGE_MAX_BYTES + 64 * 1024;

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// Per-IP quota on `/api/v1`; `None` leaves the API unthrottled.
    pub rate_limit: Option<RateLimit>,
    /// Directory served as static files; `None` disables serving uploads.
    pub upload_dir: Option<PathBuf>,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT_LANGUAGE])
        .max_age(Duration::from_secs(3600))
}

fn api_routes() -> Router {
    Router::new()
        .route(
            "/users",
            post(auth::register)
                .get(users::list_users)
                .merge(
                    put(users::update_user).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
                ),
        )
        .route("/users/profile", get(users::current_user))
        .route("/auth/login", post(auth::login))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/articles/by-id/{id}",
            get(articles::get_article_by_id)
                .put(articles::update_article_by_id)
                .delete(articles::delete_article_by_id),
        )
        .route(
            "/articles/{slug}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/articles/{slug}/favorite",
            post(articles::favorite_article).delete(articles::unfavorite_article),
        )
        .route(
            "/articles/{slug}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/articles/{slug}/comments/{id}",
            axum::routing::delete(comments::delete_comment),
        )
        .route("/profiles/{username}", get(profiles::get_profile))
        .route(
            "/profiles/{username}/follow",
            post(profiles::follow_user).delete(profiles::unfollow_user),
        )
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let mut api = api_routes();
    if let Some(limit) = options.rate_limit {
        match api_rate_limit_layer(limit) {
            Some(layer) => api = api.layer(layer),
            None => warn!(?limit, "rate limit quota is empty, leaving the API unthrottled"),
        }
    }

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/v1", api);

    if let Some(dir) = options.upload_dir {
        let mount = mount_path(&dir);
        if mount == "/" {
            warn!(dir = %dir.display(), "upload directory cannot be served at the root");
        } else {
            router = router.nest_service(&mount, ServeDir::new(dir));
        }
    }

    router
        .layer(from_fn(localize_errors))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
