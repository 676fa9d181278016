//! Quiz flow against the mock HTTP client, including the double-submit
//! guard.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use mentor::adapters::mock::MockHttpClient;
use mentor::api::ApiClient;
use mentor::app::messages::{AppMessage, ViewEvent};
use mentor::views::{QuizView, ViewContext};

const BASE: &str = "http://test";

const QUIZ_JSON: &str = r#"{
    "quiz_id": 42,
    "skill_id": 1,
    "questions": [
        {"type": "multiple_choice", "question": "Pick", "options": ["A", "B"], "correct_answer": "B"}
    ]
}"#;

fn setup(mock: &MockHttpClient) -> (ViewContext, UnboundedReceiver<AppMessage>) {
    mock.set_json_response(&format!("{BASE}/api/lessons/3/quiz"), QUIZ_JSON);
    mock.set_json_response(
        &format!("{BASE}/api/quizzes/submit"),
        r#"{"xp_earned": 20, "new_achievements": []}"#,
    );
    let client = Arc::new(ApiClient::new(BASE, Arc::new(mock.clone())));
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ViewContext {
            client,
            tx,
            generation: 1,
        },
        rx,
    )
}

async fn next_event(rx: &mut UnboundedReceiver<AppMessage>) -> ViewEvent {
    match tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("no message arrived")
        .expect("channel closed")
    {
        AppMessage::View { event, .. } => event,
        other => panic!("unexpected message: {other:?}"),
    }
}

#[tokio::test]
async fn finishing_twice_submits_exactly_once() {
    let mock = MockHttpClient::new();
    let (ctx, mut rx) = setup(&mock);
    let mut view = QuizView::mount(3, ctx);
    let loaded = next_event(&mut rx).await;
    view.apply(loaded);

    view.select_next_option();
    view.check_answer();
    assert!(view.answers[&0].correct);

    view.finish();
    view.finish();
    let submitted = next_event(&mut rx).await;
    view.apply(submitted);

    assert_eq!(mock.count_requests("POST", "/api/quizzes/submit"), 1);
    assert_eq!(view.result.as_ref().unwrap().xp_earned, 20);

    // Nothing else was spawned by the second call.
    assert!(
        tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .is_err()
    );
    assert_eq!(mock.count_requests("POST", "/api/quizzes/submit"), 1);
}

#[tokio::test]
async fn submitted_score_reflects_correct_count() {
    let mock = MockHttpClient::new();
    let (ctx, mut rx) = setup(&mock);
    let mut view = QuizView::mount(3, ctx);
    let loaded = next_event(&mut rx).await;
    view.apply(loaded);

    // Answer wrong on purpose: score should be 0 of 1.
    view.check_answer();
    assert!(!view.answers[&0].correct);
    view.finish();
    let _ = next_event(&mut rx).await;

    let submit = mock
        .requests()
        .into_iter()
        .find(|r| r.url.contains("/quizzes/submit"))
        .expect("submit request recorded");
    let body: serde_json::Value = serde_json::from_str(submit.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["score"], 0.0);
    assert_eq!(body["quiz_id"], 42);
    assert_eq!(body["answers"]["0"]["correct"], false);
}
