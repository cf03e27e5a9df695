use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use std::collections::BTreeSet;
use std::fmt;

pub const TITLE_MAX_CHARS: usize = 50;
pub const BODY_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("article.id_invalid"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn bounded_text(value: String, max: usize, required: &str, too_long: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(required));
    }
    if value.chars().count() > max {
        return Err(DomainError::validation(too_long));
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(
            value.into(),
            TITLE_MAX_CHARS,
            "article.title_required",
            "article.title_too_long",
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("article.description_required"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleDescription> for String {
    fn from(value: ArticleDescription) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody(String);

impl ArticleBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(
            value.into(),
            BODY_MAX_CHARS,
            "article.body_required",
            "article.body_too_long",
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleBody> for String {
    fn from(value: ArticleBody) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("article.slug_required"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

/// Ordered tags with blanks dropped. Duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            tags.into_iter()
                .map(|tag| tag.into().trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<TagList> for Vec<String> {
    fn from(value: TagList) -> Self {
        value.0
    }
}

/// Set of users who favorited one article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritedBy(BTreeSet<UserId>);

impl FavoritedBy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the user was already present.
    pub fn insert(&mut self, user_id: UserId) -> bool {
        self.0.insert(user_id)
    }

    /// Returns `false` when the user was not present.
    pub fn remove(&mut self, user_id: UserId) -> bool {
        self.0.remove(&user_id)
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.0.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_body_limits_count_chars() {
        assert!(ArticleTitle::new("é".repeat(TITLE_MAX_CHARS)).is_ok());
        assert!(ArticleTitle::new("x".repeat(TITLE_MAX_CHARS + 1)).is_err());
        assert!(ArticleBody::new("x".repeat(BODY_MAX_CHARS)).is_ok());
        assert!(ArticleBody::new("x".repeat(BODY_MAX_CHARS + 1)).is_err());
        assert!(ArticleTitle::new("  ").is_err());
    }

    #[test]
    fn tag_list_drops_blank_entries() {
        let tags = TagList::new(vec![" rust ", "", "web", "   "]);
        assert_eq!(tags.as_slice(), ["rust", "web"]);
    }

    #[test]
    fn favorited_by_is_a_set() {
        let mut set = FavoritedBy::new();
        let user = UserId::new(3).unwrap();
        assert!(set.insert(user));
        assert!(!set.insert(user));
        assert_eq!(set.len(), 1);
        assert!(set.remove(user));
        assert!(!set.remove(user));
        assert!(set.is_empty());
    }
}
