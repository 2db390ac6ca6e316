// src/application/queries/users/get.rs
use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_role,
    },
    domain::user::{Role, UserId},
};

pub struct GetUserQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user(
        &self,
        actor: &AuthenticatedUser,
        query: GetUserQuery,
    ) -> ApplicationResult<UserDto> {
        ensure_role(actor, Role::Admin)?;
        let id = UserId::new(query.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}
