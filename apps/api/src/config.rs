use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::matching::scoring::{MatchConfig, MatchWeights, SkillMatchMode};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON job catalog served when a match request carries no jobs.
    pub jobs_file: Option<PathBuf>,
    pub matching: MatchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            jobs_file: std::env::var("JOBS_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            matching: match_config_from_env()?,
        })
    }
}

fn match_config_from_env() -> Result<MatchConfig> {
    let defaults = MatchConfig::default();

    let weights = MatchWeights {
        skills: parse_env("MATCH_WEIGHT_SKILLS", defaults.weights.skills)?,
        location: parse_env("MATCH_WEIGHT_LOCATION", defaults.weights.location)?,
        salary: parse_env("MATCH_WEIGHT_SALARY", defaults.weights.salary)?,
        job_type: parse_env("MATCH_WEIGHT_JOB_TYPE", defaults.weights.job_type)?,
    };
    validate_weights(&weights)?;

    let skill_match = match std::env::var("SKILL_MATCH_MODE") {
        Ok(raw) => raw
            .parse::<SkillMatchMode>()
            .map_err(anyhow::Error::msg)
            .context("SKILL_MATCH_MODE is invalid")?,
        Err(_) => defaults.skill_match,
    };

    Ok(MatchConfig {
        weights,
        salary_scale: parse_env("SALARY_SCALE", defaults.salary_scale)?,
        reason_cap: parse_env("MATCH_REASON_CAP", defaults.reason_cap)?,
        skill_match,
        parallel_threshold: parse_env("MATCH_PARALLEL_THRESHOLD", defaults.parallel_threshold)?,
    })
}

fn validate_weights(weights: &MatchWeights) -> Result<()> {
    let all = [
        weights.skills,
        weights.location,
        weights.salary,
        weights.job_type,
    ];
    if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
        bail!("Match weights must be finite and non-negative: {weights:?}");
    }
    let sum = weights.sum();
    if sum <= 0.0 {
        bail!("Match weights must have a positive sum");
    }
    if (sum - 1.0).abs() > 1e-6 {
        warn!("Match weights sum to {sum:.3}, not 1.0; overall scores will be clamped");
    }
    Ok(())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
