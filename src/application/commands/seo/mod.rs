// src/application/commands/seo/mod.rs
mod service;
mod update;

pub use service::SeoCommandService;
