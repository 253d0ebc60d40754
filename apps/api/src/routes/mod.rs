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
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/score", post(handlers::handle_score))
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
    use crate::matching::calculator::MatchEngine;
    use crate::matching::equivalence::builtin_table;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                equivalence_table_path: None,
            },
            scorer: Arc::new(MatchEngine::new(Arc::new(builtin_table().unwrap()))),
        }
    }

    fn match_body(title: &str, duration_years: f64) -> Value {
        json!({
            "profile": {
                "technical_skills": ["Python", "Xero"],
                "soft_skills": ["Communication"],
                "experience_entries": [
                    {"description": "Automated reconciliations with Python", "duration_years": duration_years}
                ],
                "education_entries": [{"level": "bachelor"}]
            },
            "job": {
                "title": title,
                "company_name": "Kuda",
                "industry": "Fintech",
                "required_skills": ["python", "quickbooks"],
                "preferred_skills": ["power bi"],
                "seniority_level": "mid",
                "min_years": 2,
                "required_education_level": "bachelor"
            }
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_builtin_table() {
        let response = build_router(test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["equivalence_table"], "builtin");
    }

    #[tokio::test]
    async fn test_full_match_returns_gap_analysis_and_tone() {
        let (status, body) = post_json("/api/v1/match", match_body("Finance Analyst", 2.0)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tone"], "energetic");
        assert_eq!(body["gap_analysis"]["direct_matches"], json!(["python"]));
        assert_eq!(
            body["gap_analysis"]["transferable_matches"][0]["candidate_skill"],
            "xero"
        );
        assert_eq!(body["gap_analysis"]["priorities"], json!(["power bi"]));
        assert_eq!(body["experience_alignment"]["meets_min_years"], true);
        assert!(body["breakdown"]["total_score"].as_f64().unwrap() <= 100.0);
    }

    #[tokio::test]
    async fn test_score_only_returns_breakdown() {
        let (status, body) =
            post_json("/api/v1/match/score", match_body("Finance Analyst", 2.0)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("gap_analysis").is_none());
        assert!(body["color_band"].is_string());
        assert!(body["recommendations"].is_array());
    }

    #[tokio::test]
    async fn test_blank_title_is_unprocessable() {
        let (status, body) = post_json("/api/v1/match", match_body("  ", 2.0)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MISSING_INPUT");
    }

    #[tokio::test]
    async fn test_absent_title_field_is_missing_input_envelope() {
        let mut body = match_body("Finance Analyst", 2.0);
        body["job"].as_object_mut().unwrap().remove("title");

        let (status, body) = post_json("/api/v1/match", body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MISSING_INPUT");
        assert!(body["error"]["message"].as_str().unwrap().contains("title"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_envelope() {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/match/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"profile\": "))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_negative_duration_is_bad_request() {
        let (status, body) = post_json("/api/v1/match/score", match_body("Analyst", -1.0)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
