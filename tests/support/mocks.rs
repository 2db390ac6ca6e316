// tests/support/mocks.rs
// In-memory doubles for the storage ports, used by the service-level unit
// tests where a concrete failure (like a slug race) has to be staged.
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use chronicle_core::application::dto::{AuthTokenDto, TokenClaims, TokenSubject};
use chronicle_core::application::error::{ApplicationError, ApplicationResult};
use chronicle_core::application::ports::security::TokenManager;
use chronicle_core::application::ports::time::Clock;
use chronicle_core::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleStatus, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use chronicle_core::domain::category::{
    Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory,
};
use chronicle_core::domain::errors::{DomainError, DomainResult};
use chronicle_core::domain::slug::{Slug, SlugExistence};
use chronicle_core::domain::user::{
    Email, NewUser, User, UserId, UserListFilter, UserRepository, UserUpdate, Username,
};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Slug uniqueness probe over a shared set. Tests mutate the set through
/// `claim` to stage a concurrent writer.
#[derive(Default)]
pub struct SharedSlugs {
    taken: Mutex<HashSet<String>>,
}

impl SharedSlugs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&self, slug: &str) {
        self.taken.lock().unwrap().insert(slug.to_owned());
    }
}

#[async_trait]
impl SlugExistence for SharedSlugs {
    async fn slug_exists(&self, candidate: &str, _excluding: Option<i64>) -> DomainResult<bool> {
        Ok(self.taken.lock().unwrap().contains(candidate))
    }
}

/// Write repository that loses the slug race a fixed number of times: each
/// staged conflict claims the contested slug and fails, as if another
/// request had committed it first.
pub struct RacyArticleWrites {
    slugs: Arc<SharedSlugs>,
    conflicts_remaining: Mutex<u32>,
    pub inserted: Mutex<Vec<NewArticle>>,
}

impl RacyArticleWrites {
    pub fn new(slugs: Arc<SharedSlugs>, conflicts: u32) -> Self {
        Self {
            slugs,
            conflicts_remaining: Mutex::new(conflicts),
            inserted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for RacyArticleWrites {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        {
            let mut remaining = self.conflicts_remaining.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                self.slugs.claim(article.slug.as_str());
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let id = self.inserted.lock().unwrap().len() as i64 + 1;
        self.inserted.lock().unwrap().push(article.clone());
        Ok(materialize_article(article, id))
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(DomainError::NotFound("not implemented".into()))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Ok(())
    }

    async fn increment_views(&self, _id: ArticleId) -> DomainResult<()> {
        Ok(())
    }
}

pub fn materialize_article(article: NewArticle, id: i64) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: article.title,
        subtitle: article.subtitle,
        content: article.content,
        author_id: article.author_id,
        category_id: article.category_id,
        tags: article.tags,
        featured_image: article.featured_image,
        status: article.status,
        published_at: article.published_at,
        created_at: article.created_at,
        updated_at: article.updated_at,
        views: 0,
        slug: article.slug,
        seo_title: article.seo_title,
        seo_description: article.seo_description,
    }
}

/// Read repository with nothing in it.
pub struct NullArticleRead;

#[async_trait]
impl ArticleReadRepository for NullArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn find_by_slug(&self, _slug: &Slug) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn list(&self, _filter: &ArticleListFilter) -> DomainResult<Vec<Article>> {
        Ok(Vec::new())
    }

    async fn count(
        &self,
        _author_id: Option<UserId>,
        _status: Option<ArticleStatus>,
    ) -> DomainResult<u64> {
        Ok(0)
    }

    async fn count_by_category(&self, _category_id: CategoryId) -> DomainResult<u64> {
        Ok(0)
    }

    async fn top_by_views(
        &self,
        _author_id: Option<UserId>,
        _limit: u32,
    ) -> DomainResult<Vec<Article>> {
        Ok(Vec::new())
    }

    async fn list_recent_published(&self, _limit: u32) -> DomainResult<Vec<Article>> {
        Ok(Vec::new())
    }
}

/// Map-backed user store.
pub struct InMemoryUsers {
    users: Mutex<HashMap<i64, User>>,
    touch_fails: bool,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|user| (i64::from(user.id), user))
                    .collect(),
            ),
            touch_fails: false,
        }
    }

    /// Makes every `touch_last_login` call fail, as if the write timed out.
    pub fn failing_touch(mut self) -> Self {
        self.touch_fails = true;
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id).unwrap(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            profile: new_user.profile,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
            last_login: None,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(profile) = update.profile {
            user.profile = profile;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.users
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| users.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == *email)
            .cloned())
    }

    async fn list(&self, _filter: &UserListFilter) -> DomainResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn touch_last_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()> {
        if self.touch_fails {
            return Err(DomainError::Persistence("last_login write timed out".into()));
        }
        if let Some(user) = self.users.lock().unwrap().get_mut(&i64::from(id)) {
            user.last_login = Some(at);
        }
        Ok(())
    }
}

/// Token manager that recognises exactly one literal token.
pub struct StaticTokens {
    pub token: &'static str,
    pub user_id: i64,
    pub issued_at: DateTime<Utc>,
}

#[async_trait]
impl TokenManager for StaticTokens {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            access_token: self.token.to_owned(),
            token_type: "Bearer".to_owned(),
            issued_at: self.issued_at,
            expires_at: self.issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<TokenClaims> {
        if token != self.token {
            return Err(ApplicationError::unauthorized("invalid token"));
        }
        Ok(TokenClaims {
            user_id: UserId::new(self.user_id).unwrap(),
            issued_at: self.issued_at,
            expires_at: self.issued_at + Duration::hours(1),
        })
    }
}

/// Map-backed category store.
pub struct InMemoryCategories {
    categories: Mutex<HashMap<i64, Category>>,
}

impl InMemoryCategories {
    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(
                categories
                    .into_iter()
                    .map(|category| (i64::from(category.id), category))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        let id = categories.keys().max().copied().unwrap_or(0) + 1;
        let category = Category {
            id: CategoryId::new(id).unwrap(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
        };
        categories.insert(id, category.clone());
        Ok(category)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        let category = categories
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(description) = update.description {
            category.description = Some(description);
        }
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.categories
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| categories.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .values()
            .find(|category| category.slug == *slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.categories.lock().unwrap().values().cloned().collect())
    }
}
