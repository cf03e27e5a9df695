// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{
        Method, Request, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::Response,
};
use scribe_core::application::{
    dto::AuthenticatedUser,
    ports::{time::Clock, util::SlugGenerator},
    services::{Adapters, ApplicationServices, Repositories},
};
use scribe_core::domain::user::{Email, NewUser, PasswordHash, User, UserRepository, Username};
use scribe_core::infrastructure::util::DefaultSlugGenerator;
use scribe_core::presentation::http::{
    i18n::Locale,
    routes::{RouterOptions, build_router, build_router_with_options},
    state::HttpState,
};
use serde_json::Value;

use super::mocks::{
    DummyClock, DummySlug, DummyTokenManager, InMemoryStore, MemoryImageStorage,
    StrictPasswordHasher, TickingClock, fixed_now, strict_hash, token_for,
};

/// Services wired to in-memory adapters, plus handles on those adapters.
pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub images: Arc<MemoryImageStorage>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_time_and_slugs(Arc::new(TickingClock::default()), Arc::new(DefaultSlugGenerator))
    }

    /// Frozen clock and identity slugs, so generated slugs are predictable.
    pub fn frozen() -> Self {
        Self::with_time_and_slugs(Arc::new(DummyClock), Arc::new(DummySlug))
    }

    fn with_time_and_slugs(clock: Arc<dyn Clock>, slugger: Arc<dyn SlugGenerator>) -> Self {
        let store = Arc::new(InMemoryStore::default());
        let images = Arc::new(MemoryImageStorage::default());

        let services = Arc::new(ApplicationServices::new(
            Repositories {
                users: store.clone(),
                article_writes: store.clone(),
                article_reads: store.clone(),
                comments: store.clone(),
                follows: store.clone(),
            },
            Adapters {
                password_hasher: Arc::new(StrictPasswordHasher),
                token_manager: Arc::new(DummyTokenManager),
                image_storage: images.clone(),
                clock,
                slugger,
            },
        ));

        Self {
            store,
            images,
            services,
        }
    }

    pub fn router(&self) -> Router {
        self.router_with_locale(Locale::En)
    }

    pub fn router_with_locale(&self, default_locale: Locale) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
            default_locale,
        })
    }

    pub fn router_with_options(&self, options: RouterOptions) -> Router {
        build_router_with_options(
            HttpState {
                services: Arc::clone(&self.services),
                default_locale: Locale::En,
            },
            options,
        )
    }

    /// Inserts a user whose password is `password` under the strict hasher.
    pub async fn seed_user(&self, email: &str, username: &str, password: &str) -> User {
        let new_user = NewUser::new(
            Email::new(email).unwrap(),
            Username::new(username).unwrap(),
            PasswordHash::new(strict_hash(password)).unwrap(),
            fixed_now(),
        );
        UserRepository::insert(self.store.as_ref(), new_user)
            .await
            .unwrap()
    }
}

pub async fn make_test_router() -> Router {
    TestContext::new().router()
}

pub fn actor(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        email: user.email.to_string(),
        username: user.username.to_string(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + chrono::Duration::hours(1),
    }
}

pub fn bearer(user: &User) -> String {
    format!("Bearer {}", token_for(user.id.into()))
}

pub fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
