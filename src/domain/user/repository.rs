use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, Role, UserId, Username},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    pub role: Option<Role>,
    pub search: Option<String>,
    pub skip: u32,
    pub limit: u32,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn list(&self, filter: &UserListFilter) -> DomainResult<Vec<User>>;

    /// Best-effort bookkeeping; callers are expected to log and swallow
    /// failures rather than fail the request.
    async fn touch_last_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()>;
}
