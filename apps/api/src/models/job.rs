use serde::{Deserialize, Serialize};

/// A job posting as listed on the marketplace. The engine never mutates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Free text such as "$100,000 - $130,000". May contain no numbers at all.
    #[serde(default)]
    pub salary_text: String,
    pub job_type: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub is_remote: bool,
    // Explanation-only flags; they never affect the score.
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_urgent: bool,
}
