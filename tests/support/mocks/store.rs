// tests/support/mocks/store.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scribe_core::domain::{
    article::{
        Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
        FavoritedBy, NewArticle,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    follow::{FollowPair, FollowRepository},
    membership::{Insertion, Removal},
    pagination::{Page, PageRequest},
    user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username},
};
use std::{
    collections::{BTreeSet, HashMap},
    sync::Mutex,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    articles: Vec<Article>,
    favorites: HashMap<ArticleId, FavoritedBy>,
    comments: Vec<Comment>,
    follows: BTreeSet<(UserId, UserId)>,
    next_user_id: i64,
    next_article_id: i64,
    next_comment_id: i64,
}

impl State {
    fn user_exists(&self, id: UserId) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn slug_taken(&self, slug: &ArticleSlug, except: Option<ArticleId>) -> bool {
        self.articles
            .iter()
            .any(|a| &a.slug == slug && Some(a.id) != except)
    }
}

/// Single in-memory database behind every repository port. It enforces the
/// same unique keys and cascades as the PostgreSQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

fn not_found(key: &str) -> DomainError {
    DomainError::NotFound(key.into())
}

fn conflict(key: &str) -> DomainError {
    DomainError::Conflict(key.into())
}

fn page_of<T: Clone>(sorted: &[T], request: PageRequest) -> Page<T> {
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let items = sorted
        .iter()
        .skip(offset)
        .take(request.limit() as usize)
        .cloned()
        .collect();
    Page::new(items, sorted.len() as u64)
}

fn newest_first<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T>
where
    T: Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted
}

impl InMemoryStore {
    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn follow_count(&self) -> usize {
        self.state.lock().unwrap().follows.len()
    }

    pub fn has_favorited(&self, id: ArticleId, user_id: UserId) -> bool {
        self.state
            .lock()
            .unwrap()
            .favorites
            .get(&id)
            .is_some_and(|set| set.contains(user_id))
    }

    pub fn favorites_of(&self, id: ArticleId) -> usize {
        self.state
            .lock()
            .unwrap()
            .favorites
            .get(&id)
            .map_or(0, FavoritedBy::len)
    }

    /// Removes a user and everything that references it.
    pub fn delete_user(&self, id: UserId) {
        let mut state = self.state.lock().unwrap();
        state.users.retain(|u| u.id != id);
        let owned: Vec<ArticleId> = state
            .articles
            .iter()
            .filter(|a| a.author_id == id)
            .map(|a| a.id)
            .collect();
        state.articles.retain(|a| a.author_id != id);
        state
            .comments
            .retain(|c| c.author_id != id && !owned.contains(&c.article_id));
        state.follows.retain(|(a, b)| *a != id && *b != id);
        for article in &owned {
            state.favorites.remove(article);
        }
        let State {
            articles,
            favorites,
            ..
        } = &mut *state;
        for article in articles.iter_mut() {
            if let Some(set) = favorites.get_mut(&article.id) {
                if set.remove(id) {
                    let at = article.updated_at;
                    article.record_favorites(set, at);
                }
            }
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.email == new_user.email) {
            return Err(conflict("user.email_taken"));
        }
        state.next_user_id += 1;
        let user = User {
            id: UserId::new(state.next_user_id)?,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if let Some(email) = &update.email {
            if state
                .users
                .iter()
                .any(|u| &u.email == email && u.id != update.id)
            {
                return Err(conflict("user.email_taken"));
            }
        }
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| not_found("user.not_found"))?;
        user.apply(update);
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<User>> {
        let state = self.state.lock().unwrap();
        let sorted = newest_first(&state.users, |u| (u.created_at, u.id));
        Ok(page_of(&sorted, page))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if !state.user_exists(article.author_id) {
            return Err(not_found("user.not_found"));
        }
        if state.slug_taken(&article.slug, None) {
            return Err(conflict("article.slug_taken"));
        }
        state.next_article_id += 1;
        let stored = Article {
            id: ArticleId::new(state.next_article_id)?,
            title: article.title,
            description: article.description,
            body: article.body,
            slug: article.slug,
            tag_list: article.tag_list,
            favorited: false,
            favorites_count: 0,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn save(&self, article: &Article) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.slug_taken(&article.slug, Some(article.id)) {
            return Err(conflict("article.slug_taken"));
        }
        let stored = state
            .articles
            .iter_mut()
            .find(|a| a.id == article.id)
            .ok_or_else(|| not_found("article.not_found"))?;
        stored.title = article.title.clone();
        stored.description = article.description.clone();
        stored.body = article.body.clone();
        stored.slug = article.slug.clone();
        stored.tag_list = article.tag_list.clone();
        stored.updated_at = article.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(not_found("article.not_found"));
        }
        state.comments.retain(|c| c.article_id != id);
        state.favorites.remove(&id);
        Ok(())
    }

    async fn add_favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Insertion<Article>> {
        let mut state = self.state.lock().unwrap();
        let State {
            articles,
            favorites,
            ..
        } = &mut *state;
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("article.not_found"))?;
        let set = favorites.entry(id).or_default();
        if !set.insert(user_id) {
            return Ok(Insertion::AlreadyPresent);
        }
        article.record_favorites(set, at);
        Ok(Insertion::Added(article.clone()))
    }

    async fn remove_favorite(
        &self,
        id: ArticleId,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Removal<Article>> {
        let mut state = self.state.lock().unwrap();
        let State {
            articles,
            favorites,
            ..
        } = &mut *state;
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("article.not_found"))?;
        let set = favorites.entry(id).or_default();
        if !set.remove(user_id) {
            return Ok(Removal::Absent);
        }
        article.record_favorites(set, at);
        Ok(Removal::Removed(article.clone()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<Article>> {
        let state = self.state.lock().unwrap();
        let sorted = newest_first(&state.articles, |a| (a.created_at, a.id));
        Ok(page_of(&sorted, page))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.iter().any(|a| a.id == comment.article_id) {
            return Err(not_found("article.not_found"));
        }
        if !state.user_exists(comment.author_id) {
            return Err(not_found("user.not_found"));
        }
        state.next_comment_id += 1;
        let stored = Comment {
            id: CommentId::new(state.next_comment_id)?,
            body: comment.body,
            article_id: comment.article_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let matching: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.belongs_to(article_id))
            .cloned()
            .collect();
        Ok(newest_first(&matching, |c| (c.created_at, i64::from(c.id))))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        if state.comments.len() == before {
            return Err(not_found("comment.not_found"));
        }
        Ok(())
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn is_following(&self, follower: UserId, following: UserId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.follows.contains(&(follower, following)))
    }

    async fn follow(&self, pair: FollowPair, _at: DateTime<Utc>) -> DomainResult<Insertion<()>> {
        let mut state = self.state.lock().unwrap();
        if !state.user_exists(pair.follower()) || !state.user_exists(pair.following()) {
            return Err(not_found("user.not_found"));
        }
        if state.follows.insert((pair.follower(), pair.following())) {
            Ok(Insertion::Added(()))
        } else {
            Ok(Insertion::AlreadyPresent)
        }
    }

    async fn unfollow(&self, pair: FollowPair) -> DomainResult<Removal<()>> {
        let mut state = self.state.lock().unwrap();
        if state.follows.remove(&(pair.follower(), pair.following())) {
            Ok(Removal::Removed(()))
        } else {
            Ok(Removal::Absent)
        }
    }
}
