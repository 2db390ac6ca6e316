// src/application/identity.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserRepository;
use std::sync::Arc;

/// Resolves a bearer token into a live principal. The token only names the
/// user; role and active status always come from the current record, so
/// role changes and deactivations take effect on the next request.
pub struct IdentityService {
    user_repo: Arc<dyn UserRepository>,
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
}

impl IdentityService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            token_manager,
            clock,
        }
    }

    pub async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claims = self.token_manager.verify(token).await?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        if !user.is_active {
            return Err(ApplicationError::account_inactive("account is disabled"));
        }

        // Best-effort bookkeeping: a failed write must not fail the request.
        if let Err(err) = self
            .user_repo
            .touch_last_login(user.id, self.clock.now())
            .await
        {
            tracing::warn!(user_id = i64::from(user.id), error = %err, "failed to record last login");
        }

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.into_inner(),
            role: user.role,
        })
    }
}
