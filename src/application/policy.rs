// src/application/policy.rs
//! Access checks shared by the command and query services. Each helper maps
//! a failed predicate onto the error bucket the HTTP layer reports.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{policy, user::Role, user::UserId};

pub fn ensure_role(actor: &AuthenticatedUser, required: Role) -> ApplicationResult<()> {
    if policy::role_satisfies(actor.role, required) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "requires the {required} role"
        )))
    }
}

pub fn ensure_owner_or_admin(
    actor: &AuthenticatedUser,
    owner_id: UserId,
) -> ApplicationResult<()> {
    if policy::owns_or_admin(actor.role, actor.id, owner_id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "not the owner of this resource",
        ))
    }
}

/// Checked before any role predicate on user deletion; admins are not
/// exempt.
pub fn ensure_not_self(actor: &AuthenticatedUser, target: UserId) -> ApplicationResult<()> {
    if actor.id == target {
        Err(ApplicationError::self_deletion(
            "cannot delete your own account",
        ))
    } else {
        Ok(())
    }
}
