//! API client integration tests against a local mock HTTP server.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mentor::adapters::ReqwestHttpClient;
use mentor::api::{ApiClient, ApiError};
use mentor::models::{Answer, Quality, QuizSubmitRequest};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Arc::new(ReqwestHttpClient::new()))
}

#[tokio::test]
async fn lists_skills() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Rust", "description": "systems"},
            {"id": 2, "name": "SQL"}
        ])))
        .mount(&server)
        .await;

    let skills = client_for(&server).list_skills().await.unwrap();
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].name, "Rust");
    assert!(skills[1].description.is_none());
}

#[tokio::test]
async fn surfaces_application_error_from_2xx_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skills/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "skill not found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).skill_detail(9).await.unwrap_err();
    assert!(matches!(err, ApiError::Application(msg) if msg.contains("skill not found")));
}

#[tokio::test]
async fn surfaces_http_status_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/progress"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).progress().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn submits_quiz_with_score_and_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/quizzes/submit"))
        .and(body_json(json!({
            "quiz_id": 42,
            "answers": {
                "0": {"answer": "B", "correct": true},
                "1": {"answer": "C", "correct": false}
            },
            "score": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "xp_earned": 25,
            "new_achievements": [
                {"key": "first_quiz", "name": "First Quiz", "description": "Finish a quiz", "unlocked": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut answers = BTreeMap::new();
    answers.insert(
        0,
        Answer {
            answer: "B".into(),
            correct: true,
        },
    );
    answers.insert(
        1,
        Answer {
            answer: "C".into(),
            correct: false,
        },
    );
    let result = client_for(&server)
        .submit_quiz(&QuizSubmitRequest {
            quiz_id: 42,
            answers,
            score: 0.5,
        })
        .await
        .unwrap();
    assert_eq!(result.xp_earned, 25);
    assert_eq!(result.new_achievements[0].key, "first_quiz");
}

#[tokio::test]
async fn rates_card_with_quality_value() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/review/7/rate"))
        .and(body_json(json!({"quality": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "xp_earned": 5,
            "next_review_days": 6,
            "new_achievements": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .rate_card(7, Quality::Good)
        .await
        .unwrap();
    assert_eq!(result.next_review_days, 6);
}

#[tokio::test]
async fn fetches_nested_lesson_content() {
    let server = MockServer::start().await;
    let content = json!({
        "objective": "Learn joins",
        "sections": [{"heading": "Inner joins", "content": "Rows that match."}],
        "summary": "Joins combine tables.",
        "exercises": []
    });
    Mock::given(method("GET"))
        .and(path("/api/lessons/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "skill_id": 1,
            "topic": "Joins",
            "order_index": 0,
            "content_json": content.to_string()
        })))
        .mount(&server)
        .await;

    let lesson = client_for(&server).lesson(3).await.unwrap();
    let parsed = lesson.parse_content().unwrap();
    assert_eq!(parsed.sections.len(), 1);
    assert_eq!(parsed.objective.as_deref(), Some("Learn joins"));
}
