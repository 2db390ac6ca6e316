// src/presentation/http/state.rs

use std::sync::Arc;

use crate::application::services::ApplicationServices;

/// Shared state handed to every handler through an [`axum::Extension`] layer.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}

impl HttpState {
    #[must_use]
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self { services }
    }
}
