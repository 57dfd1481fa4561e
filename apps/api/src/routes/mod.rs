pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::directory::handlers as directory;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz
        .route("/api/v1/quiz/questions", get(quiz::handle_get_questions))
        .route("/api/v1/quiz/questions/:id", get(quiz::handle_get_question))
        .route("/api/v1/quiz/submit", post(quiz::handle_submit_quiz))
        .route("/api/v1/quiz/results", get(quiz::handle_quiz_history))
        // Chat assistant
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/chat/history", get(chat::handle_chat_history))
        // Directory
        .route("/api/v1/careers", get(directory::handle_list_careers))
        .route(
            "/api/v1/careers/simulate",
            post(directory::handle_simulate_career),
        )
        .route("/api/v1/colleges", get(directory::handle_list_colleges))
        .route(
            "/api/v1/colleges/eligibility",
            post(directory::handle_check_eligibility),
        )
        .route(
            "/api/v1/scholarships",
            get(directory::handle_list_scholarships),
        )
        .route(
            "/api/v1/scholarships/match",
            get(directory::handle_match_scholarships),
        )
        .route("/api/v1/exams", get(directory::handle_list_exams))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::chat::service::ChatService;
    use crate::config::Config;
    use crate::llm_client::{CompletionProvider, LlmError};

    struct CannedProvider;

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _model: &str,
            _api_key: &str,
        ) -> Result<String, LlmError> {
            Ok("JEE Main is held twice a year.\n\
                - Session one is usually in January\n\
                - Session two is usually in April\n\
                - Registration happens on the NTA website"
                .to_string())
        }
    }

    /// No route exercised here touches the database; the pool never connects.
    fn app(api_key: Option<&str>) -> Router {
        let config = Config {
            database_url: "postgres://localhost/edvise_test".to_string(),
            gemini_api_key: api_key.map(str::to_string),
            gemini_model: "gemini-1.5-flash".to_string(),
            chat_timeout_secs: 25,
            port: 8080,
            rust_log: "info".to_string(),
        };
        let db = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(100))
            .connect_lazy(&config.database_url)
            .unwrap();
        let chat = Arc::new(ChatService::with_rng(
            config.chat_config(),
            Arc::new(CannedProvider),
            StdRng::seed_from_u64(3),
        ));
        build_router(AppState { db, chat, config })
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = call(app(None), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["chat_enabled"], false);
    }

    #[tokio::test]
    async fn test_quiz_questions() {
        let (status, body) = call(app(None), get("/api/v1/quiz/questions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_questions"], 20);
        assert_eq!(body["questions"].as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_quiz_question_by_id() {
        let (status, body) = call(app(None), get("/api/v1/quiz/questions/6")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 6);

        let (status, body) = call(app(None), get("/api/v1/quiz/questions/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_quiz_submit_rejects_empty_answers() {
        let (status, body) = call(
            app(None),
            post_json("/api/v1/quiz/submit", json!({ "answers": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "INPUT_MISSING");
    }

    #[tokio::test]
    async fn test_chat_greeting() {
        let (status, body) = call(app(None), post_json("/api/chat", json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["queryType"], "greeting");
        assert_eq!(body["response"]["points"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_chat_missing_message() {
        let (status, body) = call(app(Some("key")), post_json("/api/chat", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INPUT_MISSING");
    }

    #[tokio::test]
    async fn test_malformed_json_gets_error_body() {
        let request = Request::post("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from("{\"message\": "))
            .unwrap();
        let (status, body) = call(app(Some("key")), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_wrongly_typed_json_gets_error_body() {
        let (status, body) = call(
            app(Some("key")),
            post_json("/api/chat", json!({ "message": 42 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_bad_query_string_gets_error_body() {
        let (status, body) =
            call(app(None), get("/api/v1/quiz/results?user_id=not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_chat_unsupported() {
        let (status, body) = call(
            app(Some("key")),
            post_json("/api/chat", json!({ "message": "tell me a joke" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "error");
        assert_eq!(body["queryType"], "unsupported");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_without_credential() {
        let (status, body) = call(
            app(None),
            post_json("/api/chat", json!({ "message": "When is the JEE exam?" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_chat_answer_is_shaped() {
        let (status, body) = call(
            app(Some("key")),
            post_json("/api/chat", json!({ "message": "When is the JEE exam?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["queryType"], "exam_guidance");
        assert_eq!(body["response"]["summary"], "JEE Main is held twice a year.");
        assert_eq!(body["response"]["points"].as_array().unwrap().len(), 3);
        assert!(body["response"]["wordCount"].as_u64().unwrap() > 0);
    }
}
