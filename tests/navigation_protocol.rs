//! The navigation and refresh protocol, driven end to end through the App
//! with a mock HTTP client: full refresh on the dashboard, navbar-only
//! refresh elsewhere, and no refresh at all on back/forward.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use mentor::adapters::mock::{MockHttpClient, MockResponse};
use mentor::api::ApiClient;
use mentor::app::{App, AppMessage};
use mentor::router::Route;
use mentor::storage::Storage;
use mentor::traits::HttpError;

const BASE: &str = "http://test";

fn seed_snapshot(mock: &MockHttpClient) {
    mock.set_json_response(
        &format!("{BASE}/api/skills"),
        r#"[{"id": 1, "name": "Rust"}]"#,
    );
    mock.set_json_response(
        &format!("{BASE}/api/progress"),
        r#"{"level": 2, "total_xp": 300}"#,
    );
    mock.set_json_response(
        &format!("{BASE}/api/review/queue"),
        r#"{"cards": [{"id": 1, "question": "q", "answer": "a"},
                      {"id": 2, "question": "q", "answer": "a"}]}"#,
    );
}

fn build_app(mock: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::at(dir.path().to_path_buf()).unwrap();
    let client = Arc::new(ApiClient::new(BASE, Arc::new(mock.clone())));
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(client, storage, tx);
    (app, rx, dir)
}

/// Drain pending messages into the app until the channel goes quiet.
async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    loop {
        match tokio::time::timeout(Duration::from_millis(200), rx.recv()).await {
            Ok(Some(message)) => app.handle_message(message),
            _ => break,
        }
    }
}

#[tokio::test]
async fn startup_full_refresh_populates_snapshot() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);

    settle(&mut app, &mut rx).await;

    assert_eq!(app.skills.len(), 1);
    assert_eq!(app.progress.as_ref().unwrap().level, 2);
    assert_eq!(app.review_count, 2);
}

#[tokio::test]
async fn off_dashboard_navigation_is_navbar_only() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    // The server now has new data; only progress and the review count may
    // flow into the snapshot off-dashboard.
    mock.set_json_response(
        &format!("{BASE}/api/skills"),
        r#"[{"id": 1, "name": "Rust"}, {"id": 2, "name": "SQL"}]"#,
    );
    mock.set_json_response(
        &format!("{BASE}/api/progress"),
        r#"{"level": 3, "total_xp": 600}"#,
    );
    mock.clear_requests();

    app.navigate(Route::Chat(None));
    settle(&mut app, &mut rx).await;

    assert_eq!(app.route, Route::Chat(None));
    assert_eq!(app.skills.len(), 1, "skills list left stale off-dashboard");
    assert_eq!(app.progress.as_ref().unwrap().level, 3);
    assert_eq!(mock.count_requests("GET", "/api/skills"), 0);
    assert_eq!(mock.count_requests("GET", "/api/progress"), 1);
}

#[tokio::test]
async fn dashboard_navigation_is_full_refresh() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    mock.set_json_response(
        &format!("{BASE}/api/skills"),
        r#"[{"id": 1, "name": "Rust"}, {"id": 2, "name": "SQL"}]"#,
    );
    app.navigate(Route::Chat(None));
    settle(&mut app, &mut rx).await;
    app.navigate(Route::Dashboard);
    settle(&mut app, &mut rx).await;

    assert_eq!(app.skills.len(), 2, "full refresh re-fetches skills");
}

#[tokio::test]
async fn back_and_forward_do_not_refetch() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    app.navigate(Route::Chat(None));
    settle(&mut app, &mut rx).await;
    mock.clear_requests();

    app.go_back();
    settle(&mut app, &mut rx).await;
    assert_eq!(app.route, Route::Dashboard);

    app.go_forward();
    settle(&mut app, &mut rx).await;
    assert_eq!(app.route, Route::Chat(None));

    assert!(
        mock.requests().is_empty(),
        "history navigation must not trigger any refresh"
    );
}

#[tokio::test]
async fn review_failure_degrades_to_zero_count() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    mock.set_response(
        &format!("{BASE}/api/review/queue"),
        MockResponse::Error(HttpError::Timeout("queue".into())),
    );
    let (mut app, mut rx, _dir) = build_app(&mock);

    settle(&mut app, &mut rx).await;

    assert_eq!(app.review_count, 0);
    assert_eq!(app.skills.len(), 1, "other fetches still land");
}

#[tokio::test]
async fn snapshot_failures_keep_cached_values() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    mock.set_response(
        &format!("{BASE}/api/skills"),
        MockResponse::Error(HttpError::ConnectionFailed("down".into())),
    );
    mock.set_response(
        &format!("{BASE}/api/progress"),
        MockResponse::Error(HttpError::ConnectionFailed("down".into())),
    );
    app.navigate(Route::Dashboard);
    settle(&mut app, &mut rx).await;

    assert_eq!(app.skills.len(), 1);
    assert_eq!(app.progress.as_ref().unwrap().level, 2);
}

fn seed_lesson(mock: &MockHttpClient) {
    let lesson = serde_json::json!({
        "id": 9,
        "skill_id": 1,
        "topic": "Ownership",
        "content_json": r#"{"exercises": [{"prompt": "Fix it", "language": "rust", "starter_code": ""}]}"#,
    });
    mock.set_json_response(&format!("{BASE}/api/lessons/9"), &lesson.to_string());
}

fn type_into_exercise(app: &mut App, text: &str) {
    match &mut app.view {
        mentor::views::View::Lesson(lesson) => {
            lesson.exercises[0].input.set_text(text);
            lesson.exercises[0].mark_dirty();
        }
        _ => panic!("expected the lesson view to be mounted"),
    }
}

#[tokio::test]
async fn navigation_flushes_drafts_still_inside_the_debounce() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    seed_lesson(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    app.navigate(Route::Lesson(9));
    settle(&mut app, &mut rx).await;
    type_into_exercise(&mut app, "half-typed attempt");

    // Leave well before the debounce deadline; the edit must still land.
    app.navigate(Route::Dashboard);
    assert_eq!(
        app.storage.load_draft(9, 0).as_deref(),
        Some("half-typed attempt")
    );
}

#[tokio::test]
async fn quit_flushes_drafts_still_inside_the_debounce() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    seed_lesson(&mock);
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    app.navigate(Route::Lesson(9));
    settle(&mut app, &mut rx).await;
    type_into_exercise(&mut app, "quit mid-thought");

    app.quit();
    assert!(app.should_quit);
    assert_eq!(
        app.storage.load_draft(9, 0).as_deref(),
        Some("quit mid-thought")
    );
}

#[tokio::test]
async fn stale_view_events_are_discarded() {
    let mock = MockHttpClient::new();
    seed_snapshot(&mock);
    mock.set_json_response(
        &format!("{BASE}/api/chat/1/history"),
        r#"{"messages": [{"role": "user", "content": "old"}]}"#,
    );
    mock.set_json_response(
        &format!("{BASE}/api/skills/1"),
        r#"{"skill": {"id": 1, "name": "Rust"}, "lessons": []}"#,
    );
    let (mut app, mut rx, _dir) = build_app(&mock);
    settle(&mut app, &mut rx).await;

    // Mount the chat view, then navigate away before pumping its messages.
    app.navigate(Route::Chat(Some(1)));
    app.navigate(Route::Review);
    settle(&mut app, &mut rx).await;

    // The chat history response arrived under an old generation and must not
    // have been applied anywhere; the mounted view is the review session.
    assert_eq!(app.route, Route::Review);
    match &app.view {
        mentor::views::View::Review(review) => assert_eq!(review.cards.len(), 2),
        _ => panic!("expected the review view to be mounted"),
    }
}
