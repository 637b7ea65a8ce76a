use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::MatchScorer;
use crate::models::JobPosting;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: WeightedMatchScorer built from `config.matching`.
    pub scorer: Arc<dyn MatchScorer>,
    /// Postings loaded at startup; read-only for the life of the process.
    pub catalog: Arc<Vec<JobPosting>>,
}
