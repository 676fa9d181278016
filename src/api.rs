//! Mentor API client.
//!
//! Thin typed wrapper over the learning server's JSON REST API. Every method
//! maps to one endpoint; the server does all real computation (generation,
//! grading, scheduling, XP). Runs against any [`HttpClient`], so tests can
//! swap in the mock adapter.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::*;
use crate::traits::{Headers, HttpClient, HttpError};

/// Default server address, overridable via `--server` or `MENTOR_SERVER_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Error type for API operations.
///
/// Covers the three failure classes the client distinguishes: transport
/// failures, error statuses / application errors the server reports, and
/// malformed response bodies.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, ...)
    #[error(transparent)]
    Transport(#[from] HttpError),
    /// Non-2xx HTTP status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },
    /// Application-level error embedded in a 2xx body (`{"error": ...}`)
    #[error("{0}")]
    Application(String),
    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Client for the Mentor learning server.
pub struct ApiClient {
    /// Base URL of the server, without the `/api` prefix.
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// URL of the progress export download. Opened in the browser rather
    /// than fetched, so the server can serve it as an attachment.
    pub fn export_url(&self) -> String {
        self.url("/progress/export")
    }

    /// Decode a response body, surfacing embedded application errors.
    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return Err(ApiError::Application(error.to_string()));
        }
        serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.text().unwrap_or_default(),
            });
        }
        Self::decode(&response.body)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let payload = serde_json::to_string(body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let response = self.http.post(&url, &payload, &Headers::new()).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.text().unwrap_or_default(),
            });
        }
        Self::decode(&response.body)
    }

    /// POST where the caller only cares that the action succeeded.
    async fn post_ok<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let _: Value = self.post_json(path, body).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_json("/skills").await
    }

    pub async fn skill_detail(&self, skill_id: i64) -> Result<SkillDetail, ApiError> {
        self.get_json(&format!("/skills/{}", skill_id)).await
    }

    /// Generate a curriculum preview without creating the skill.
    pub async fn preview_skill(&self, name: &str) -> Result<CurriculumPreview, ApiError> {
        self.post_json(
            "/skills/preview",
            &SkillPreviewRequest {
                name: name.to_string(),
            },
        )
        .await
    }

    pub async fn create_skill(&self, request: &SkillCreateRequest) -> Result<SkillCreated, ApiError> {
        self.post_json("/skills", request).await
    }

    pub async fn delete_skill(&self, skill_id: i64) -> Result<(), ApiError> {
        self.post_ok(&format!("/skills/{}/delete", skill_id), &Value::Null)
            .await
    }

    /// Fetch the skill's cheat sheet (markdown, generated on first request).
    pub async fn cheatsheet(&self, skill_id: i64) -> Result<String, ApiError> {
        self.get_json(&format!("/skills/{}/cheatsheet", skill_id))
            .await
    }

    pub async fn regenerate_cheatsheet(&self, skill_id: i64) -> Result<String, ApiError> {
        self.post_json(
            &format!("/skills/{}/cheatsheet/regenerate", skill_id),
            &Value::Null,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub async fn project(&self, skill_id: i64) -> Result<ProjectBrief, ApiError> {
        self.get_json(&format!("/skills/{}/project", skill_id)).await
    }

    pub async fn project_submissions(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectSubmission>, ApiError> {
        self.get_json(&format!("/projects/{}/submissions", project_id))
            .await
    }

    pub async fn submit_project(
        &self,
        project_id: i64,
        submission: &str,
    ) -> Result<ProjectEvaluation, ApiError> {
        self.post_json(
            &format!("/projects/{}/submit", project_id),
            &ProjectSubmitRequest {
                submission: submission.to_string(),
            },
        )
        .await
    }

    // ------------------------------------------------------------------
    // Lessons & exercises
    // ------------------------------------------------------------------

    pub async fn lesson(&self, lesson_id: i64) -> Result<Lesson, ApiError> {
        self.get_json(&format!("/lessons/{}", lesson_id)).await
    }

    /// Ask the server to generate the lesson body for a planned lesson.
    pub async fn generate_lesson(&self, skill_id: i64, lesson_id: i64) -> Result<Lesson, ApiError> {
        self.post_json(
            "/lessons/generate",
            &LessonGenerateRequest { skill_id, lesson_id },
        )
        .await
    }

    pub async fn complete_lesson(&self, lesson_id: i64) -> Result<(), ApiError> {
        self.post_ok(&format!("/lessons/{}/complete", lesson_id), &Value::Null)
            .await
    }

    pub async fn quiz_for_lesson(&self, lesson_id: i64) -> Result<Quiz, ApiError> {
        self.get_json(&format!("/lessons/{}/quiz", lesson_id)).await
    }

    pub async fn generate_quiz(&self, lesson_id: i64) -> Result<Quiz, ApiError> {
        self.post_json(&format!("/lessons/{}/quiz", lesson_id), &Value::Null)
            .await
    }

    pub async fn lesson_feedback(&self, lesson_id: i64) -> Result<LessonFeedback, ApiError> {
        self.get_json(&format!("/lessons/{}/feedback", lesson_id))
            .await
    }

    pub async fn send_lesson_feedback(
        &self,
        lesson_id: i64,
        request: &LessonFeedbackRequest,
    ) -> Result<(), ApiError> {
        self.post_ok(&format!("/lessons/{}/feedback", lesson_id), request)
            .await
    }

    /// Ask the tutor to explain part of a lesson in different words.
    pub async fn explain(&self, lesson_id: i64, question: &str) -> Result<Explanation, ApiError> {
        self.post_json(
            &format!("/lessons/{}/explain", lesson_id),
            &serde_json::json!({ "question": question }),
        )
        .await
    }

    pub async fn run_exercise(
        &self,
        request: &ExerciseRunRequest,
    ) -> Result<ExerciseRunResult, ApiError> {
        self.post_json("/exercises/run", request).await
    }

    pub async fn evaluate_exercise(
        &self,
        request: &ExerciseEvaluateRequest,
    ) -> Result<ExerciseEvaluation, ApiError> {
        self.post_json("/exercises/evaluate", request).await
    }

    // ------------------------------------------------------------------
    // Quizzes
    // ------------------------------------------------------------------

    pub async fn grade_answer(&self, request: &GradeRequest) -> Result<GradeResult, ApiError> {
        self.post_json("/quizzes/grade", request).await
    }

    pub async fn submit_quiz(
        &self,
        request: &QuizSubmitRequest,
    ) -> Result<QuizSubmitResult, ApiError> {
        self.post_json("/quizzes/submit", request).await
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.post_json("/chat", request).await
    }

    pub async fn chat_history(&self, skill_id: i64) -> Result<ChatHistory, ApiError> {
        self.get_json(&format!("/chat/{}/history", skill_id)).await
    }

    // ------------------------------------------------------------------
    // Review & progress
    // ------------------------------------------------------------------

    pub async fn review_queue(&self) -> Result<ReviewQueue, ApiError> {
        self.get_json("/review/queue").await
    }

    pub async fn rate_card(&self, card_id: i64, quality: Quality) -> Result<RateResult, ApiError> {
        self.post_json(
            &format!("/review/{}/rate", card_id),
            &RateRequest {
                quality: quality.as_i64(),
            },
        )
        .await
    }

    pub async fn progress(&self) -> Result<Progress, ApiError> {
        self.get_json("/progress").await
    }

    pub async fn charts(&self) -> Result<ChartData, ApiError> {
        self.get_json("/progress/charts").await
    }

    pub async fn achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        self.get_json("/achievements").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;

    fn client_with(mock: &MockHttpClient) -> ApiClient {
        ApiClient::new("http://test", Arc::new(mock.clone()))
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let mock = MockHttpClient::new();
        let client = ApiClient::new("http://test/", Arc::new(mock));
        assert_eq!(client.url("/skills"), "http://test/api/skills");
        assert_eq!(client.export_url(), "http://test/api/progress/export");
    }

    #[tokio::test]
    async fn test_list_skills() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://test/api/skills",
            r#"[{"id": 1, "name": "Rust", "description": "The language"}]"#,
        );
        let skills = client_with(&mock).list_skills().await.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Rust");
    }

    #[tokio::test]
    async fn test_application_error_in_success_body() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://test/api/lessons/99", r#"{"error": "Lesson not found"}"#);
        let err = client_with(&mock).lesson(99).await.unwrap_err();
        assert!(matches!(err, ApiError::Application(msg) if msg == "Lesson not found"));
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test/api/progress",
            crate::adapters::mock::MockResponse::Success(crate::traits::Response::new(
                500,
                bytes::Bytes::from("boom"),
            )),
        );
        let err = client_with(&mock).progress().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://test/api/progress", "{not json");
        let err = client_with(&mock).progress().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_rate_card_sends_quality_scale() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://test/api/review/5/rate", r#"{"xp_earned": 10}"#);
        let result = client_with(&mock)
            .rate_card(5, Quality::Good)
            .await
            .unwrap();
        assert_eq!(result.xp_earned, 10);

        let requests = mock.requests();
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"quality":4}"#));
    }

    #[tokio::test]
    async fn test_transport_error_passthrough() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test/api/review/queue",
            crate::adapters::mock::MockResponse::Error(HttpError::ConnectionFailed(
                "refused".to_string(),
            )),
        );
        let err = client_with(&mock).review_queue().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
