// src/presentation/http/middleware/locale.rs
use crate::presentation::http::{error::ErrorDetails, i18n::Locale, state::HttpState};
use axum::{
    body::Body,
    extract::Request,
    http::header::{ACCEPT_LANGUAGE, CONTENT_LENGTH},
    middleware::Next,
    response::Response,
};

fn request_locale(request: &Request) -> Locale {
    let fallback = request
        .extensions()
        .get::<HttpState>()
        .map(|state| state.default_locale)
        .unwrap_or_default();

    request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or(fallback)
}

/// Re-renders error bodies in the negotiated locale. Error responses are
/// built in English and carry their message key in `ErrorDetails`.
pub async fn localize_errors(request: Request, next: Next) -> Response {
    let locale = request_locale(&request);
    let response = next.run(request).await;
    if locale == Locale::En {
        return response;
    }

    let Some(details) = response.extensions().get::<ErrorDetails>().cloned() else {
        return response;
    };
    let (mut parts, body) = response.into_parts();
    match serde_json::to_vec(&details.body(parts.status, locale)) {
        Ok(bytes) => {
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => Response::from_parts(parts, body),
    }
}
