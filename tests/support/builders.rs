// tests/support/builders.rs
use chrono::{DateTime, Utc};

use chronicle_core::domain::article::{Article, ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
use chronicle_core::domain::category::{Category, CategoryId, CategoryName};
use chronicle_core::domain::slug::Slug;
use chronicle_core::domain::user::{Email, PasswordHash, Role, User, UserId, UserProfile, Username};

pub struct UserBuilder {
    id: i64,
    username: String,
    email: String,
    role: Role,
    is_active: bool,
    name: String,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            username: "reporter".into(),
            email: "reporter@example.org".into(),
            role: Role::Reporter,
            is_active: true,
            name: "Test Reporter".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: Email::new(self.email).unwrap(),
            password_hash: PasswordHash::new("argon2-test-hash").unwrap(),
            role: self.role,
            profile: UserProfile::new(self.name, None, None).unwrap(),
            is_active: self.is_active,
            created_at: Utc::now(),
            last_login: None,
        }
    }
}

pub struct CategoryBuilder {
    id: i64,
    name: String,
    slug: String,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Politics".into(),
            slug: "politics".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn build(self) -> Category {
        Category {
            id: CategoryId::new(self.id).unwrap(),
            name: CategoryName::new(self.name).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            description: None,
            created_at: Utc::now(),
        }
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    author_id: i64,
    category_id: i64,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
    views: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            content: "Test body".into(),
            author_id: 1,
            category_id: 1,
            status: ArticleStatus::Draft,
            published_at: None,
            views: 0,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn published(mut self) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(Utc::now());
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            subtitle: None,
            content: ArticleBody::new(self.content).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            category_id: CategoryId::new(self.category_id).unwrap(),
            tags: Vec::new(),
            featured_image: None,
            status: self.status,
            published_at: self.published_at,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            views: self.views,
            slug: Slug::new(self.slug).unwrap(),
            seo_title: None,
            seo_description: None,
        }
    }
}
