//! Match Scorer — four independent 0–100 sub-scores per (profile, job) pair, combined
//! with fixed product weights into one overall score.
//!
//! `MatchScorer` is the seam: `AppState` carries an `Arc<dyn MatchScorer>` and the ranker
//! only ever talks to the trait. `WeightedMatchScorer` is the rule-table implementation.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matching::normalize::{
    extract_salary_range, normalize_token, NormalizedProfile, DEFAULT_SALARY_SCALE,
};
use crate::matching::reasons::build_match_reasons;
use crate::models::{JobPosting, SalaryRange};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Product weights for combining sub-scores. Retunable; not a derived optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub location: f64,
    pub salary: f64,
    pub job_type: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            location: 0.20,
            salary: 0.25,
            job_type: 0.15,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.salary + self.job_type
    }
}

/// How a user skill is compared against a job skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatchMode {
    /// Either normalized string contains the other. Short tokens can over-match.
    #[default]
    Substring,
    /// Normalized strings must be equal.
    Exact,
}

impl SkillMatchMode {
    fn matches(self, user_skill: &str, job_skill: &str) -> bool {
        match self {
            SkillMatchMode::Substring => {
                user_skill.contains(job_skill) || job_skill.contains(user_skill)
            }
            SkillMatchMode::Exact => user_skill == job_skill,
        }
    }
}

impl FromStr for SkillMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(SkillMatchMode::Substring),
            "exact" => Ok(SkillMatchMode::Exact),
            other => Err(format!(
                "unknown skill match mode '{other}' (expected 'substring' or 'exact')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    /// Multiplier applied to numbers found in salary text.
    pub salary_scale: u64,
    /// Maximum number of match reasons per job.
    pub reason_cap: usize,
    pub skill_match: SkillMatchMode,
    /// Job count at which per-job scoring moves onto the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            salary_scale: DEFAULT_SALARY_SCALE,
            reason_cap: 4,
            skill_match: SkillMatchMode::Substring,
            parallel_threshold: 1000,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Scored view of one posting. Borrows the posting; derived data, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch<'a> {
    pub job: &'a JobPosting,
    pub overall_score: u8,
    pub skills_score: u8,
    pub location_score: u8,
    pub salary_score: u8,
    pub job_type_score: u8,
    pub match_reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait MatchScorer: Send + Sync {
    fn score<'a>(&self, profile: &NormalizedProfile, job: &'a JobPosting) -> JobMatch<'a>;
}

/// Rule-table scorer with configurable weights. Pure and deterministic.
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    config: MatchConfig,
}

impl WeightedMatchScorer {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score<'a>(&self, profile: &NormalizedProfile, job: &'a JobPosting) -> JobMatch<'a> {
        let config = &self.config;

        let matched = matching_skills(&job.skills, &profile.skills, config.skill_match);
        let skills_score = skills_score(matched.matching.len(), matched.job_skill_count);
        let location_score = location_score(profile, job);
        let job_salary = extract_salary_range(&job.salary_text, config.salary_scale);
        let salary_score = salary_score(profile.salary, job_salary);
        let job_type_score = job_type_score(&profile.job_types, &job.job_type);

        let overall_score = overall_score(
            skills_score,
            location_score,
            salary_score,
            job_type_score,
            &config.weights,
        );

        let match_reasons = build_match_reasons(
            job,
            &matched.matching,
            location_score,
            salary_score,
            config.reason_cap,
        );

        JobMatch {
            job,
            overall_score,
            skills_score,
            location_score,
            salary_score,
            job_type_score,
            match_reasons,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

pub(crate) struct SkillOverlap<'a> {
    /// Job skills (display form, input order, first occurrence) that matched a user skill.
    pub matching: Vec<&'a str>,
    /// Distinct non-blank job skills after normalization.
    pub job_skill_count: usize,
}

pub(crate) fn matching_skills<'a>(
    job_skills: &'a [String],
    user_skills: &BTreeSet<String>,
    mode: SkillMatchMode,
) -> SkillOverlap<'a> {
    let mut seen = BTreeSet::new();
    let mut matching = Vec::new();

    for raw in job_skills {
        let skill = normalize_token(raw);
        if skill.is_empty() || !seen.insert(skill.clone()) {
            continue;
        }
        if user_skills.iter().any(|u| mode.matches(u, &skill)) {
            matching.push(raw.trim());
        }
    }

    SkillOverlap {
        matching,
        job_skill_count: seen.len(),
    }
}

/// A job with no skills scores 0, never a perfect match.
pub(crate) fn skills_score(matching: usize, job_skill_count: usize) -> u8 {
    percent(matching as f64, job_skill_count.max(1) as f64)
}

/// First matching rule wins: remote for a remote seeker, location text match,
/// remote regardless of preference, otherwise a floor.
pub(crate) fn location_score(profile: &NormalizedProfile, job: &JobPosting) -> u8 {
    if job.is_remote && profile.remote_preference {
        100
    } else if !profile.location.is_empty()
        && job.location.to_lowercase().contains(&profile.location)
    {
        100
    } else if job.is_remote {
        80
    } else {
        30
    }
}

/// Share of the user's expected range covered by the job's range.
/// `user` must already be ordered.
pub(crate) fn salary_score(user: SalaryRange, job: SalaryRange) -> u8 {
    if user.min > job.max || user.max < job.min {
        return 0;
    }

    let overlap = user.max.min(job.max) - user.min.max(job.min);
    let user_span = user.max - user.min;
    if user_span == 0 {
        return 100;
    }

    percent(overlap as f64, user_span as f64)
}

/// Type mismatch is a soft filter: partial credit, not zero.
pub(crate) fn job_type_score(preferred: &BTreeSet<String>, job_type: &str) -> u8 {
    if preferred.is_empty() || preferred.contains(&normalize_token(job_type)) {
        100
    } else {
        50
    }
}

pub(crate) fn overall_score(
    skills: u8,
    location: u8,
    salary: u8,
    job_type: u8,
    weights: &MatchWeights,
) -> u8 {
    let weighted = weights.skills * f64::from(skills)
        + weights.location * f64::from(location)
        + weights.salary * f64::from(salary)
        + weights.job_type * f64::from(job_type);
    clamp_score(weighted)
}

fn percent(numerator: f64, denominator: f64) -> u8 {
    clamp_score(100.0 * numerator / denominator)
}

fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
