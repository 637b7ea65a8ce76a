//! Ranker — scores every posting and produces a stable, descending total order.
//!
//! Per-job scoring is independent, so large job lists fan out over rayon. `collect()`
//! on an indexed parallel iterator keeps input order, and the sort that follows is stable,
//! so both paths produce identical output.

use rayon::prelude::*;
use tracing::debug;

use crate::matching::normalize::NormalizedProfile;
use crate::matching::scoring::{JobMatch, MatchScorer};
use crate::models::{JobPosting, UserProfile};

/// Scores and ranks `jobs` against `profile` with the given scorer backend.
///
/// Returns exactly one match per input job, sorted by `overall_score` descending;
/// equal scores keep their input order.
pub fn compute_job_matches<'a>(
    scorer: &dyn MatchScorer,
    profile: &UserProfile,
    jobs: &'a [JobPosting],
    parallel_threshold: usize,
) -> Vec<JobMatch<'a>> {
    let normalized = NormalizedProfile::from_profile(profile);
    let parallel = jobs.len() >= parallel_threshold.max(1);

    let mut matches: Vec<JobMatch<'a>> = if parallel {
        jobs.par_iter()
            .map(|job| scorer.score(&normalized, job))
            .collect()
    } else {
        jobs.iter().map(|job| scorer.score(&normalized, job)).collect()
    };

    sort_matches(&mut matches);

    debug!(
        jobs = jobs.len(),
        parallel,
        top_score = matches.first().map(|m| m.overall_score),
        "scored job matches"
    );

    matches
}

/// Stable descending sort on `overall_score`.
pub fn sort_matches(matches: &mut [JobMatch<'_>]) {
    matches.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
}

/// Caller-side top-N view, applied after the full sort.
pub fn top_n<'a>(mut matches: Vec<JobMatch<'a>>, n: usize) -> Vec<JobMatch<'a>> {
    matches.truncate(n);
    matches
}
