// tests/support/mocks/util.rs
use scribe_core::application::ports::util::SlugGenerator;

/// Returns the input unchanged.
#[derive(Clone, Debug, Default)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
