// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

const FALLBACK_SLUG_BASE: &str = "article";

/// Domain service producing article slugs of the form `<slugified-title>-<unix-millis>`.
///
/// The millisecond suffix makes collisions unlikely. The store's unique
/// constraint on `slug` turns any remaining collision into a conflict.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub fn slug_for(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            FALLBACK_SLUG_BASE.to_string()
        } else {
            base
        };
        let millis = self.clock.now().timestamp_millis();
        ArticleSlug::new(format!("{base}-{millis}"))
    }
}
