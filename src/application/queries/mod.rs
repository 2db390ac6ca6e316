// src/application/queries/mod.rs
pub mod analytics;
pub mod articles;
pub mod categories;
pub mod seo;
pub mod users;
