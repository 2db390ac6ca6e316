// src/application/commands/users/create.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
        policy::ensure_role,
    },
    domain::user::{Email, NewUser, PasswordHash, Role, UserProfile, Username},
};

pub struct CreateUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile: UserProfileDto,
}

impl UserCommandService {
    pub async fn create_user(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_role(actor, Role::Admin)?;

        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let profile = UserProfile::new(
            command.profile.name,
            command.profile.bio,
            command.profile.avatar,
        )?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        let password_hash = PasswordHash::new(self.password_hasher.hash(&command.password).await?)?;
        let new_user = NewUser::new(
            username,
            email,
            password_hash,
            command.role,
            profile,
            self.clock.now(),
        );

        let created = self.user_repo.insert(new_user).await?;
        Ok(created.into())
    }
}
