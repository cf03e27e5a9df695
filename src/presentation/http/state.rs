// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::i18n::Locale;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Used when a request carries no supported `Accept-Language`.
    pub default_locale: Locale,
}
