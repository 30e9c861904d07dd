use std::sync::Arc;

use guidance_engine::{CareerRanker, EngineConfig};

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; never mutated.
    pub engine: Arc<EngineConfig>,
    /// Pluggable ranking backend. Default: RuleBasedRanker.
    pub ranker: Arc<dyn CareerRanker>,
}
