//! Axum route handlers for the Matching API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranker::{compute_job_matches, top_n};
use crate::matching::scoring::JobMatch;
use crate::models::{JobPosting, UserProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub profile: UserProfile,
    /// Postings to score. Falls back to the loaded catalog when absent.
    #[serde(default)]
    pub jobs: Option<Vec<JobPosting>>,
    /// Top-N view applied after the full ranking.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse<'a> {
    pub request_id: Uuid,
    pub computed_at: DateTime<Utc>,
    /// Number of jobs scored, before `limit` is applied.
    pub total: usize,
    pub matches: Vec<JobMatch<'a>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Scores the given jobs (or the catalog) against the profile and returns them ranked.
/// Scoring runs on the blocking pool since large job lists are CPU-bound.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    if request.limit == Some(0) {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let request_id = Uuid::new_v4();
    let jobs = match request.jobs {
        Some(jobs) => Arc::new(jobs),
        None => Arc::clone(&state.catalog),
    };
    info!(%request_id, jobs = jobs.len(), limit = ?request.limit, "Scoring job matches");

    let scorer = Arc::clone(&state.scorer);
    let parallel_threshold = state.config.matching.parallel_threshold;
    let profile = request.profile;
    let limit = request.limit;

    let body = tokio::task::spawn_blocking(move || -> anyhow::Result<Value> {
        let matches = compute_job_matches(scorer.as_ref(), &profile, &jobs, parallel_threshold);
        let total = matches.len();
        let matches = match limit {
            Some(n) => top_n(matches, n),
            None => matches,
        };
        Ok(serde_json::to_value(MatchResponse {
            request_id,
            computed_at: Utc::now(),
            total,
            matches,
        })?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Match scoring task failed: {e}")))??;

    Ok(Json(body))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.catalog.as_ref().clone())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .catalog
        .iter()
        .find(|job| job.id == job_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}
