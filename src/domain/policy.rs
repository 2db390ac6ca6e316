// src/domain/policy.rs
//! Role and ownership predicates. The lattice is flat: admin satisfies every
//! role requirement, editor and reporter satisfy only their own.

use crate::domain::user::{Role, UserId};

pub fn role_satisfies(actor: Role, required: Role) -> bool {
    actor == required || actor == Role::Admin
}

pub fn owns_or_admin(actor_role: Role, actor_id: UserId, owner_id: UserId) -> bool {
    actor_role == Role::Admin || actor_id == owner_id
}
