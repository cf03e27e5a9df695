// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Keeps ASCII word characters, whitespace and hyphens, then lets `slug`
/// lowercase and collapse separators.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let kept: String = input
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
            .collect();
        slugify(kept)
    }
}
