//! Profile/Job Normalizer — turns loosely formatted input into comparable primitives.
//!
//! Nothing here mutates the originals; every function returns fresh values.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{SalaryRange, UserProfile};

/// Default multiplier for numbers embedded in salary text ("120" means $120,000).
pub const DEFAULT_SALARY_SCALE: u64 = 1000;

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Comparable view of a [`UserProfile`], computed once per scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub skills: BTreeSet<String>,
    /// Trimmed and lower-cased; empty means no location given.
    pub location: String,
    /// Always ordered (`min <= max`).
    pub salary: SalaryRange,
    pub job_types: BTreeSet<String>,
    pub remote_preference: bool,
}

impl NormalizedProfile {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            skills: normalize_skill_set(&profile.skills),
            location: normalize_token(&profile.location),
            salary: profile.salary_expectation.ordered(),
            job_types: normalize_skill_set(&profile.preferred_job_types),
            remote_preference: profile.remote_preference,
        }
    }
}

/// Canonical form of a single skill or job-type token: trimmed and lower-cased.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lower-cases and trims each entry, dropping blanks and collapsing duplicates.
pub fn normalize_skill_set<S: AsRef<str>>(skills: &[S]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| normalize_token(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extracts a salary range from free text.
///
/// Every run of ASCII digits counts as one number, so thousands separators split a figure:
/// "$120,000 - $150,000" yields 120, 0, 150, 0. The smallest and largest numbers are
/// multiplied by `scale` to form the range. No numbers yields `(0, 0)`, which the
/// scorer treats as an unknown salary.
pub fn extract_salary_range(salary_text: &str, scale: u64) -> SalaryRange {
    let mut numbers = INTEGER_RE
        .find_iter(salary_text)
        .filter_map(|m| m.as_str().parse::<u64>().ok());

    let Some(first) = numbers.next() else {
        return SalaryRange::new(0, 0);
    };

    let (lo, hi) = numbers.fold((first, first), |(lo, hi), n| (lo.min(n), hi.max(n)));
    SalaryRange::new(lo.saturating_mul(scale), hi.saturating_mul(scale))
}
