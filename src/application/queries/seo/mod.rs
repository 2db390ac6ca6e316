// src/application/queries/seo/mod.rs
mod llms;
mod llms_sitemap;
mod meta_tags;
mod robots;
mod service;
mod settings;
mod sitemap;

pub use meta_tags::GetMetaTagsQuery;
pub use service::SeoQueryService;
