// tests/support/builders.rs
use scribe_core::domain::article::{
    ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, NewArticle, TagList,
};
use scribe_core::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    title: String,
    slug: String,
    description: String,
    body: String,
    tags: Vec<String>,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            title: "Test Article".into(),
            slug: "test-article".into(),
            description: "Test description".into(),
            body: "Test body".into(),
            tags: Vec::new(),
            author_id: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn author(mut self, author_id: impl Into<i64>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle {
            title: ArticleTitle::new(self.title).unwrap(),
            description: ArticleDescription::new(self.description).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            tag_list: TagList::new(self.tags),
            author_id: UserId::new(self.author_id).unwrap(),
            created_at: fixed_now(),
        }
    }
}
