// src/application/ports/mod.rs
pub mod security;
pub mod seo;
pub mod time;

// Aliases for the dyn port types injected into services.
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type SeoSettingsStorePort = dyn seo::SeoSettingsStore;
