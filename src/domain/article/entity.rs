// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, FavoritedBy, TagList,
};
use crate::domain::ownership::OwnedResource;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub slug: ArticleSlug,
    pub tag_list: TagList,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller may change. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub tag_list: Option<TagList>,
}

impl Article {
    /// True when the patch carries a title different from the current one.
    pub fn title_changes(&self, patch: &ArticlePatch) -> bool {
        patch
            .title
            .as_ref()
            .is_some_and(|title| title != &self.title)
    }

    pub fn apply_patch(
        &mut self,
        patch: ArticlePatch,
        slug: Option<ArticleSlug>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(tag_list) = patch.tag_list {
            self.tag_list = tag_list;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        self.updated_at = now;
    }

    /// Derives the counter and the flag from the favoriting set.
    pub fn record_favorites(&mut self, favorited_by: &FavoritedBy, now: DateTime<Utc>) {
        self.favorites_count = favorited_by.len() as i64;
        self.favorited = !favorited_by.is_empty();
        self.updated_at = now;
    }
}

impl OwnedResource for Article {
    fn owner_id(&self) -> UserId {
        self.author_id
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub slug: ArticleSlug,
    pub tag_list: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_article() -> Article {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Hello").unwrap(),
            description: ArticleDescription::new("d").unwrap(),
            body: ArticleBody::new("b").unwrap(),
            slug: ArticleSlug::new("hello-1").unwrap(),
            tag_list: TagList::new(["a"]),
            favorited: false,
            favorites_count: 0,
            author_id: UserId::new(1).unwrap(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn same_title_is_not_a_change() {
        let article = sample_article();
        let patch = ArticlePatch {
            title: Some(ArticleTitle::new("Hello").unwrap()),
            ..ArticlePatch::default()
        };
        assert!(!article.title_changes(&patch));
        assert!(!article.title_changes(&ArticlePatch::default()));
    }

    #[test]
    fn apply_patch_keeps_absent_fields() {
        let mut article = sample_article();
        let now = article.updated_at + chrono::Duration::seconds(30);
        article.apply_patch(
            ArticlePatch {
                body: Some(ArticleBody::new("new body").unwrap()),
                ..ArticlePatch::default()
            },
            None,
            now,
        );
        assert_eq!(article.title.as_str(), "Hello");
        assert_eq!(article.slug.as_str(), "hello-1");
        assert_eq!(article.body.as_str(), "new body");
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn record_favorites_tracks_set_size() {
        let mut article = sample_article();
        let mut set = FavoritedBy::new();
        set.insert(UserId::new(2).unwrap());
        set.insert(UserId::new(3).unwrap());
        article.record_favorites(&set, article.updated_at);
        assert_eq!(article.favorites_count, 2);
        assert!(article.favorited);

        set.remove(UserId::new(2).unwrap());
        set.remove(UserId::new(3).unwrap());
        article.record_favorites(&set, article.updated_at);
        assert_eq!(article.favorites_count, 0);
        assert!(!article.favorited);
    }
}
