//! Job catalog — the in-memory list of postings served when a request brings none.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::models::JobPosting;

/// Loads a JSON array of postings. Job ids must be unique.
pub fn load_catalog(path: &Path) -> Result<Vec<JobPosting>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job catalog '{}'", path.display()))?;

    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("Job catalog '{}' is not a valid posting list", path.display()))?;

    let mut seen = HashSet::new();
    for job in &jobs {
        if !seen.insert(job.id.as_str()) {
            bail!("Duplicate job id '{}' in catalog '{}'", job.id, path.display());
        }
    }

    info!("Loaded {} job postings from {}", jobs.len(), path.display());
    Ok(jobs)
}
