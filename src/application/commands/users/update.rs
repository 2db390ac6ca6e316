// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_role,
    },
    domain::user::{Email, Role, UserId, UserProfile, UserUpdate, Username},
};

#[derive(Default)]
pub struct UpdateUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub profile: Option<UserProfileDto>,
    pub is_active: Option<bool>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_role(actor, Role::Admin)?;

        let id = UserId::new(id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(id);
        if let Some(username) = command.username {
            update = update.with_username(Username::new(username)?);
        }
        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(role) = command.role {
            update = update.with_role(role);
        }
        if let Some(profile) = command.profile {
            update = update.with_profile(UserProfile::new(
                profile.name,
                profile.bio,
                profile.avatar,
            )?);
        }
        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }

        if update.is_noop() {
            return Err(ApplicationError::validation("no fields to update"));
        }

        let updated = self.user_repo.update(update).await?;
        Ok(updated.into())
    }
}
