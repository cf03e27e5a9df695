// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleWriteRepository, NewArticle, TagList,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::membership::{Insertion, Removal};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};

const ARTICLE_COLUMNS: &str = "id, title, description, body, slug, tag_list, favorited, \
                               favorites_count, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    description: String,
    body: String,
    slug: String,
    tag_list: Vec<String>,
    favorited: bool,
    favorites_count: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            slug: ArticleSlug::new(row.slug)?,
            tag_list: TagList::new(row.tag_list),
            favorited: row.favorited,
            favorites_count: row.favorites_count,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Row lock that serializes favorite changes on one article.
async fn lock_article(conn: &mut PgConnection, id: ArticleId) -> DomainResult<()> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM articles WHERE id = $1 FOR UPDATE")
        .bind(i64::from(id))
        .fetch_optional(conn)
        .await
        .map_err(map_sqlx)?
        .map(|_| ())
        .ok_or_else(|| DomainError::NotFound("article.not_found".into()))
}

/// Recomputes the counter and flag from the join table.
async fn refresh_favorites(
    conn: &mut PgConnection,
    id: ArticleId,
    at: DateTime<Utc>,
) -> DomainResult<Article> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "UPDATE articles SET
            favorites_count = (SELECT COUNT(1) FROM article_favorites WHERE article_id = $1),
            favorited = EXISTS (SELECT 1 FROM article_favorites WHERE article_id = $1),
            updated_at = $2
         WHERE id = $1
         RETURNING {ARTICLE_COLUMNS}"
    ))
    .bind(i64::from(id))
    .bind(at)
    .fetch_one(conn)
    .await
    .map_err(map_sqlx)?;

    Article::try_from(row)
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            description,
            body,
            slug,
            tag_list,
            author_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, description, body, slug, tag_list, favorited,
                                   favorites_count, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, FALSE, 0, $6, $7, $7)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(slug.as_str())
        .bind(Vec::<String>::from(tag_list))
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn save(&self, article: &Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET title = $2, description = $3, body = $4, slug = $5, tag_list = $6, updated_at = $7
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(article.id))
        .bind(article.title.as_str())
        .bind(article.description.as_str())
        .bind(article.body.as_str())
        .bind(article.slug.as_str())
        .bind(article.tag_list.as_slice())
        .bind(article.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article.not_found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        // comments and favorites go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article.not_found".into()));
        }
        Ok(())
    }

    async fn add_favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Insertion<Article>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        lock_article(&mut tx, id).await?;

        let inserted = sqlx::query(
            "INSERT INTO article_favorites (article_id, user_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (article_id, user_id) DO NOTHING",
        )
        .bind(i64::from(id))
        .bind(i64::from(user_id))
        .bind(at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        if inserted == 0 {
            tx.rollback().await.map_err(map_sqlx)?;
            return Ok(Insertion::AlreadyPresent);
        }

        let article = refresh_favorites(&mut tx, id, at).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(Insertion::Added(article))
    }

    async fn remove_favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Removal<Article>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        lock_article(&mut tx, id).await?;

        let removed = sqlx::query(
            "DELETE FROM article_favorites WHERE article_id = $1 AND user_id = $2",
        )
        .bind(i64::from(id))
        .bind(i64::from(user_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        if removed == 0 {
            tx.rollback().await.map_err(map_sqlx)?;
            return Ok(Removal::Absent);
        }

        let article = refresh_favorites(&mut tx, id, at).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(Removal::Removed(article))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<Article>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(articles, u64::try_from(total).unwrap_or_default()))
    }
}
