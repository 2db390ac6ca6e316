// src/application/queries/seo/settings.rs
use super::SeoQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SeoSettingsDto},
        error::ApplicationResult,
        policy::ensure_role,
    },
    domain::user::Role,
};

impl SeoQueryService {
    pub async fn get_settings(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SeoSettingsDto> {
        ensure_role(actor, Role::Admin)?;
        self.store.load().await
    }
}
