// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
        policy::ensure_role,
    },
    domain::user::{Role, UserListFilter},
};

pub struct ListUsersQuery {
    pub skip: i64,
    pub limit: i64,
    pub role: Option<Role>,
    pub search: Option<String>,
}

impl UserQueryService {
    pub async fn list_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<Vec<UserDto>> {
        ensure_role(actor, Role::Admin)?;

        const MAX_LIMIT: i64 = 100;
        let skip = query.skip.max(0);
        let limit = if query.limit <= 0 || query.limit > MAX_LIMIT {
            MAX_LIMIT
        } else {
            query.limit
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filter = UserListFilter {
            role: query.role,
            search: query.search.filter(|s| !s.trim().is_empty()),
            skip: skip.min(i64::from(u32::MAX)) as u32,
            limit: limit as u32,
        };

        let users = self.user_repo.list(&filter).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
