// src/application/commands/analytics/mod.rs
mod service;
mod track;

pub use service::AnalyticsCommandService;
pub use track::TrackViewCommand;
