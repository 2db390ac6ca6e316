// src/infrastructure/mod.rs
pub mod bootstrap;
pub mod database;
pub mod repositories;
pub mod security;
pub mod seo_store;
pub mod time;
