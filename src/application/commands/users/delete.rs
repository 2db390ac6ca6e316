// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        policy::{ensure_not_self, ensure_role},
    },
    domain::user::{Role, UserId},
};

impl UserCommandService {
    /// The self-deletion guard runs before the role gate, so an admin
    /// pointing the call at themselves sees the dedicated error rather
    /// than a permissions failure.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        let id = UserId::new(id)?;
        ensure_not_self(actor, id)?;
        ensure_role(actor, Role::Admin)?;

        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.user_repo.delete(id).await?;
        Ok(())
    }
}
