pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/match/requirement",
            post(handlers::handle_match_requirement),
        )
        .route("/api/v1/match/catalog", post(handlers::handle_match_catalog))
        .route("/api/v1/match/upload", post(handlers::handle_match_upload))
        // Catalog pass-through
        .route(
            "/api/v1/opportunities",
            get(handlers::handle_list_opportunities),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
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
    use crate::catalog::StaticCatalog;
    use crate::config::Config;
    use crate::models::opportunity::{OpportunityRequirement, OpportunityStatus};

    const RESUME: &str = "B.Tech CSE, CGPA: 8.2. Skills: Python, React, SQL, Docker.";

    fn posting(
        id: &str,
        skills: &[&str],
        min: Option<f64>,
        status: OpportunityStatus,
    ) -> OpportunityRequirement {
        OpportunityRequirement {
            id: id.to_string(),
            title: format!("Posting {id}"),
            company: "Campus".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            min_academic_score: min,
            deadline: None,
            status,
        }
    }

    fn test_router() -> Router {
        let catalog = StaticCatalog::new(vec![
            posting("web", &["react", "javascript"], None, OpportunityStatus::Active),
            posting("data", &["python", "sql"], Some(7.5), OpportunityStatus::Active),
            posting("mobile", &["kotlin", "swift"], Some(9.0), OpportunityStatus::Active),
            posting("closed", &["python"], None, OpportunityStatus::Closed),
        ]);
        let state = AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                opportunity_api_url: None,
                opportunity_api_token: None,
                catalog_path: None,
                catalog_timeout_secs: 1,
                max_upload_bytes: 64 * 1024,
            },
            catalog: Arc::new(catalog),
        };
        build_router(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(parts: &[(&str, Option<(&str, &str)>, &str)]) -> Request<Body> {
        const BOUNDARY: &str = "X-CAMPUS-BOUNDARY";
        let mut body = String::new();
        for (name, file, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match file {
                Some((file_name, content_type)) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::post("/api/v1/match/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn match_ids(body: &Value) -> Vec<String> {
        body["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["opportunity_id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog"], "static");
    }

    #[tokio::test]
    async fn test_requirement_match() {
        let (status, body) = send(post_json(
            "/api/v1/match/requirement",
            json!({
                "resume_text": RESUME,
                "required_skills": ["python", "react", "rust"],
                "min_academic_score": 7.0
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["analysis_id"].is_string());
        assert_eq!(body["profile"]["academic_score"], 8.2);
        // 2/3 * 60 + 40
        assert_eq!(body["result"]["eligibility_score"], 80);
        assert_eq!(body["result"]["band"], "excellent");
        assert_eq!(body["result"]["missing_skills"], json!(["rust"]));
        assert!(body["suggestions"][0]["suggestion"]
            .as_str()
            .unwrap()
            .starts_with("Learn rust"));
        assert_eq!(body["suggestions"][0]["priority"], "high");
    }

    #[tokio::test]
    async fn test_requirement_rejects_negative_minimum() {
        let (status, body) = send(post_json(
            "/api/v1/match/requirement",
            json!({ "resume_text": RESUME, "min_academic_score": -1.0 }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_catalog_match_ranks_whole_catalog() {
        let (status, body) = send(post_json(
            "/api/v1/match/catalog",
            json!({ "resume_text": RESUME }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["evaluated"], 4);
        // data 100, closed 100, web 70; mobile 0 + 36 is dropped
        assert_eq!(match_ids(&body), vec!["data", "closed", "web"]);
    }

    #[tokio::test]
    async fn test_catalog_match_open_only() {
        let (status, body) = send(post_json(
            "/api/v1/match/catalog",
            json!({ "resume_text": RESUME, "open_only": true }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["evaluated"], 3);
        assert_eq!(match_ids(&body), vec!["data", "web"]);
    }

    #[tokio::test]
    async fn test_catalog_match_with_empty_resume_is_not_an_error() {
        let (status, body) = send(post_json(
            "/api/v1/match/catalog",
            json!({ "resume_text": "" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["skills"], json!([]));
        assert!(body["profile"]["academic_score"].is_null());
        // Postings without a minimum top out at 0 + 40
        assert!(match_ids(&body).is_empty());
    }

    #[tokio::test]
    async fn test_upload_plain_text_resume() {
        let (status, body) = send(multipart(&[
            ("file", Some(("resume.txt", "text/plain")), RESUME),
            ("open_only", None, "true"),
        ]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["evaluated"], 3);
        assert_eq!(match_ids(&body), vec!["data", "web"]);
        assert!(body["profile"]["skills"]
            .as_array()
            .unwrap()
            .contains(&json!("docker")));
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let (status, body) = send(multipart(&[("open_only", None, "true")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("file"));
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let (status, _) = send(multipart(&[(
            "file",
            Some(("resume.docx", "application/msword")),
            "binary",
        )]))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_opportunities() {
        let (status, body) = send(
            Request::get("/api/v1/opportunities")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[3]["status"], "Closed");
    }
}
