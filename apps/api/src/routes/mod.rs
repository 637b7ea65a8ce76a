pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(handlers::handle_get_job))
        // Matching
        .route("/api/v1/matches", post(handlers::handle_match))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::scoring::{MatchConfig, WeightedMatchScorer};
    use crate::models::JobPosting;

    fn posting(id: &str, skills: &[&str], salary: &str, remote: bool) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Role {id}"),
            company: "Acme".to_string(),
            location: "Tokyo".to_string(),
            salary_text: salary.to_string(),
            job_type: "Full-time".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            is_remote: remote,
            is_verified: false,
            is_urgent: false,
        }
    }

    fn test_state() -> AppState {
        let matching = MatchConfig::default();
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                jobs_file: None,
                matching: matching.clone(),
            },
            scorer: Arc::new(WeightedMatchScorer::new(matching)),
            catalog: Arc::new(vec![
                posting("weak", &[], "no salary listed", false),
                posting("strong", &["React", "TypeScript", "Node.js"], "$120,000 - $150,000", true),
            ]),
        }
    }

    fn profile_json() -> Value {
        json!({
            "skills": ["React", "Node.js"],
            "salaryExpectation": {"min": 80000, "max": 150000},
            "remotePreference": true
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let (status, body) =
            send(Request::builder().uri("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_against_catalog_ranks_strong_first() {
        let (status, body) = send(post_json(
            "/api/v1/matches",
            json!({ "profile": profile_json() }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches[0]["job"]["id"], "strong");
        assert_eq!(matches[0]["overallScore"], 87);
        assert_eq!(matches[0]["skillsScore"], 67);
        assert_eq!(matches[0]["matchReasons"][0], "2 matching skills: React, Node.js");
        assert_eq!(matches[1]["job"]["id"], "weak");
        assert_eq!(matches[1]["overallScore"], 21);
        assert!(body["requestId"].is_string());
    }

    #[tokio::test]
    async fn test_match_with_inline_jobs_and_limit() {
        let jobs = json!([
            {"id": "a", "title": "A", "company": "X", "jobType": "Contract"},
            {"id": "b", "title": "B", "company": "Y", "jobType": "Full-time",
             "skills": ["React"], "salaryText": "$80k - $150k", "isRemote": true},
            {"id": "c", "title": "C", "company": "Z", "jobType": "Gig"}
        ]);
        let (status, body) = send(post_json(
            "/api/v1/matches",
            json!({ "profile": profile_json(), "jobs": jobs, "limit": 1 }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["job"]["id"], "b");
    }

    #[tokio::test]
    async fn test_match_with_empty_jobs_returns_empty() {
        let (status, body) = send(post_json(
            "/api/v1/matches",
            json!({ "profile": profile_json(), "jobs": [] }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert!(body["matches"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_limit_rejected() {
        let (status, body) = send(post_json(
            "/api/v1/matches",
            json!({ "profile": profile_json(), "limit": 0 }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_profile_rejected_with_error_envelope() {
        let (status, body) = send(post_json("/api/v1/matches", json!({ "jobs": [] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("profile"));
    }

    #[tokio::test]
    async fn test_malformed_body_rejected_with_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/matches")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_partial_salary_range_falls_back_to_default_bound() {
        let (status, body) = send(post_json(
            "/api/v1/matches",
            json!({ "profile": { "salaryExpectation": { "min": 80000 } }, "jobs": [] }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_get_job_and_not_found() {
        let (status, body) =
            send(Request::builder().uri("/api/v1/jobs/strong").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["salaryText"], "$120,000 - $150,000");

        let (status, body) =
            send(Request::builder().uri("/api/v1/jobs/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_jobs_returns_catalog() {
        let (status, body) =
            send(Request::builder().uri("/api/v1/jobs").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
