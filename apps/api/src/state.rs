use std::sync::Arc;

use crate::resume::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<ResumeParser>,
}
