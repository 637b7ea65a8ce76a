use serde::{Deserialize, Serialize};

/// Upper bound of the salary expectation assumed when a profile carries none.
pub const DEFAULT_SALARY_MAX: u64 = 200_000;

/// Inclusive salary range. May arrive inverted; use [`SalaryRange::ordered`] before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: u64,
    #[serde(default = "default_salary_max")]
    pub max: u64,
}

fn default_salary_max() -> u64 {
    DEFAULT_SALARY_MAX
}

impl SalaryRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Returns the range with its bounds swapped if `min > max`.
    pub fn ordered(self) -> Self {
        Self {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
        }
    }
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_SALARY_MAX,
        }
    }
}

/// The job seeker's side of a match. Read-only input to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_expectation: SalaryRange,
    /// Empty means "no preference".
    #[serde(default)]
    pub preferred_job_types: Vec<String>,
    #[serde(default)]
    pub remote_preference: bool,
}
