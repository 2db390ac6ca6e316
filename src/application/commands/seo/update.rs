// src/application/commands/seo/update.rs
use super::SeoCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SeoSettingsDto, SeoSettingsUpdate},
        error::ApplicationResult,
        policy::ensure_role,
    },
    domain::user::Role,
};

impl SeoCommandService {
    /// Partial update: absent fields keep their current values.
    pub async fn update_settings(
        &self,
        actor: &AuthenticatedUser,
        update: SeoSettingsUpdate,
    ) -> ApplicationResult<SeoSettingsDto> {
        ensure_role(actor, Role::Admin)?;
        let settings = update.apply_to(self.store.load().await?);
        self.store.save(settings.clone()).await?;
        Ok(settings)
    }
}
