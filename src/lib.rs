// src/lib.rs
//! Chronicle backend: articles, categories, users, analytics and the SEO
//! surfaces of a small news site, exposed over HTTP.
//!
//! Layering follows ports-and-adapters: `domain` owns entities and
//! repository contracts, `application` owns use cases behind command and
//! query services, `infrastructure` owns SQLite and crypto adapters, and
//! `presentation` owns the axum wiring.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
