// src/presentation/http/controllers/mod.rs
pub mod analytics;
pub mod articles;
pub mod auth;
pub mod categories;
pub mod seo;
pub mod users;
