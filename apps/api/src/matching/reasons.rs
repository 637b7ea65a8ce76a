//! Human-readable match explanations. Order is fixed so the UI renders consistently.

use crate::models::JobPosting;

/// Location sub-score above which a location reason is shown.
const LOCATION_REASON_THRESHOLD: u8 = 80;
/// Salary sub-score above which a salary reason is shown.
const SALARY_REASON_THRESHOLD: u8 = 70;

/// Builds reasons in priority order (skills, location, salary, verified, urgent),
/// stopping once `cap` reasons are collected.
pub fn build_match_reasons(
    job: &JobPosting,
    matching_skills: &[&str],
    location_score: u8,
    salary_score: u8,
    cap: usize,
) -> Vec<String> {
    let candidates = [
        (!matching_skills.is_empty()).then(|| {
            format!(
                "{} matching skills: {}",
                matching_skills.len(),
                matching_skills.join(", ")
            )
        }),
        (location_score > LOCATION_REASON_THRESHOLD).then(|| {
            if job.is_remote {
                "Remote work available".to_string()
            } else {
                "Location match".to_string()
            }
        }),
        (salary_score > SALARY_REASON_THRESHOLD).then(|| "Salary meets expectations".to_string()),
        job.is_verified.then(|| "Verified employer".to_string()),
        job.is_urgent.then(|| "Urgent hiring".to_string()),
    ];

    candidates.into_iter().flatten().take(cap).collect()
}
