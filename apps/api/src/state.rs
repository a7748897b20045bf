use std::sync::Arc;

use crate::analysis::AtsAnalyzer;
use crate::config::Config;
use crate::render::RenderOptions;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single persisted resume record.
    pub store: Arc<ResumeStore>,
    pub analyzer: AtsAnalyzer,
    pub render_options: RenderOptions,
}
