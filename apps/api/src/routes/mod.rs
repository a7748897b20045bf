pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::store::handlers as resume;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resume",
            get(resume::handle_get_resume)
                .put(resume::handle_replace_resume)
                .delete(resume::handle_reset_resume),
        )
        .route("/api/v1/resume/:section", put(resume::handle_update_section))
        // Analysis API
        .route(
            "/api/v1/analysis",
            get(analysis::handle_analyze_stored).post(analysis::handle_analyze),
        )
        .route("/api/v1/professions", get(analysis::handle_list_professions))
        .route(
            "/api/v1/professions/:id/suggestions",
            get(analysis::handle_profession_suggestions),
        )
        // Render API
        .route(
            "/api/v1/render",
            get(render::handle_render_stored).post(render::handle_render),
        )
        .route("/api/v1/export", get(render::handle_export))
        .route("/api/v1/templates", get(render::handle_list_templates))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::matcher::MatchPolicy;
    use crate::analysis::AtsAnalyzer;
    use crate::config::{Config, StorageBackend};
    use crate::render::RenderOptions;
    use crate::store::{MemoryStoragePort, ResumeStore, DEFAULT_STORAGE_KEY};

    async fn test_app() -> Router {
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            data_dir: "./data".into(),
            storage_backend: StorageBackend::Memory,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            match_policy: MatchPolicy::Substring,
            condensed_reference_limit: 2,
        };
        let store =
            ResumeStore::load(Arc::new(MemoryStoragePort::new()), DEFAULT_STORAGE_KEY).await;
        build_router(AppState {
            config,
            store: Arc::new(store),
            analyzer: AtsAnalyzer::default(),
            render_options: RenderOptions::default(),
        })
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let response = app.oneshot(request("GET", "/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["service"], "funda-api");
        assert_eq!(body["storage"]["backend"], "memory");
        assert_eq!(body["storage"]["key"], DEFAULT_STORAGE_KEY);
        assert_eq!(body["matchPolicy"], "substring");
    }

    #[tokio::test]
    async fn test_section_update_is_visible_to_analysis() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                "/api/v1/resume/profession",
                Some(json!("software-engineer")),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                "/api/v1/resume/personalInfo",
                Some(json!({ "fullName": "Ada", "summary": "React and Docker" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/api/v1/analysis", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let found = body["found_keywords"].as_array().unwrap();
        assert!(found.contains(&json!("React")));
        assert!(found.contains(&json!("Docker")));
    }

    #[tokio::test]
    async fn test_unknown_section_is_not_found() {
        let app = test_app().await;
        let response = app
            .oneshot(request("PUT", "/api/v1/resume/hobbies", Some(json!([]))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_section_is_bad_request() {
        let app = test_app().await;
        let response = app
            .oneshot(request(
                "PUT",
                "/api/v1/resume/experience",
                Some(json!({ "not": "a list" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reset_returns_default_record() {
        let app = test_app().await;
        app.clone()
            .oneshot(request("PUT", "/api/v1/resume/profession", Some(json!("nurse"))))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(request("DELETE", "/api/v1/resume", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/api/v1/resume", None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["profession"], "");
        assert_eq!(body["selectedTemplate"], "professional-classic");
    }

    #[tokio::test]
    async fn test_post_analysis_of_empty_record() {
        let app = test_app().await;
        let response = app
            .oneshot(request("POST", "/api/v1/analysis", Some(json!({}))))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["score_percent"], 8);
        assert_eq!(body["band"]["band"], "needs_improvement");
    }

    #[tokio::test]
    async fn test_post_render_unknown_template_falls_back() {
        let app = test_app().await;
        let response = app
            .oneshot(request(
                "POST",
                "/api/v1/render",
                Some(json!({ "record": { "personalInfo": { "summary": "Hi" } }, "template": "nope" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["template"], "professional-classic");
        assert_eq!(body["sections"][0]["heading"], "PROFESSIONAL SUMMARY");
    }

    #[tokio::test]
    async fn test_export_sets_attachment_headers() {
        let app = test_app().await;
        app.clone()
            .oneshot(request(
                "PUT",
                "/api/v1/resume/personalInfo",
                Some(json!({ "fullName": "Ada Lovelace" })),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(request("GET", "/api/v1/export?format=html", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ada_Lovelace_Resume.html\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_export_file_name_drops_header_breaking_characters() {
        let app = test_app().await;
        app.clone()
            .oneshot(request(
                "PUT",
                "/api/v1/resume/personalInfo",
                Some(json!({ "fullName": "Ada \"Countess\" Love\\lace\r\n" })),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(request("GET", "/api/v1/export?format=md", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Ada_Countess_Lovelace_Resume.md\""
        );
    }

    #[tokio::test]
    async fn test_export_rejects_unknown_format() {
        let app = test_app().await;
        let response = app
            .oneshot(request("GET", "/api/v1/export?format=pdf", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_template_and_profession_catalogs() {
        let app = test_app().await;
        let response = app
            .clone()
            .oneshot(request("GET", "/api/v1/templates", None))
            .await
            .unwrap();
        assert_eq!(
            json_body(response).await["templates"].as_array().unwrap().len(),
            11
        );

        let response = app
            .clone()
            .oneshot(request("GET", "/api/v1/professions/software-engineer/suggestions", None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);

        let response = app
            .oneshot(request("GET", "/api/v1/professions/astronaut/suggestions", None))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert!(body["suggestions"].as_array().unwrap().is_empty());
    }
}
