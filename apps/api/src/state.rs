use std::sync::Arc;

use crate::config::Config;
use crate::matching::calculator::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: MatchEngine over the startup equivalence table.
    pub scorer: Arc<dyn MatchScorer>,
}
