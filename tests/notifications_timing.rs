//! Toast and achievement lifetimes, exercised with a paused clock: a toast
//! lives exactly five seconds, a popup four, and a stale timer can never
//! clear a newer notification.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use mentor::adapters::mock::MockHttpClient;
use mentor::api::ApiClient;
use mentor::app::messages::AppMessage;
use mentor::app::App;
use mentor::models::Achievement;
use mentor::notifications::ToastKind;
use mentor::storage::Storage;

fn build_app() -> (App, UnboundedReceiver<AppMessage>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::at(dir.path().to_path_buf()).unwrap();
    let mock = MockHttpClient::new();
    let client = Arc::new(ApiClient::new("http://test", Arc::new(mock)));
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(client, storage, tx);
    (app, rx, dir)
}

/// Let spawned tasks run, then feed whatever they sent into the app.
async fn pump(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    while let Ok(message) = rx.try_recv() {
        app.handle_message(message);
    }
}

#[tokio::test(start_paused = true)]
async fn toast_clears_after_five_seconds_not_before() {
    let (mut app, mut rx, _dir) = build_app();
    pump(&mut app, &mut rx).await;

    app.show_toast("saved", ToastKind::Success);
    assert!(app.notifications.toast().is_some());
    pump(&mut app, &mut rx).await;

    tokio::time::advance(Duration::from_millis(4999)).await;
    pump(&mut app, &mut rx).await;
    assert!(app.notifications.toast().is_some(), "toast expired early");

    tokio::time::advance(Duration::from_millis(2)).await;
    pump(&mut app, &mut rx).await;
    assert!(app.notifications.toast().is_none(), "toast outlived its slot");
}

#[tokio::test(start_paused = true)]
async fn replacing_toast_restarts_the_clock() {
    let (mut app, mut rx, _dir) = build_app();
    pump(&mut app, &mut rx).await;

    app.show_toast("first", ToastKind::Info);
    pump(&mut app, &mut rx).await;
    tokio::time::advance(Duration::from_secs(3)).await;
    app.show_toast("second", ToastKind::Info);
    pump(&mut app, &mut rx).await;

    // The first toast's timer fires at t=5s; the slot now belongs to the
    // second toast and must survive it.
    tokio::time::advance(Duration::from_millis(2001)).await;
    pump(&mut app, &mut rx).await;
    let toast = app.notifications.toast().expect("second toast still up");
    assert_eq!(toast.message, "second");

    // The second toast's own timer fires at t=8s.
    tokio::time::advance(Duration::from_secs(3)).await;
    pump(&mut app, &mut rx).await;
    assert!(app.notifications.toast().is_none());
}

#[tokio::test(start_paused = true)]
async fn achievement_popup_lasts_four_seconds() {
    let (mut app, mut rx, _dir) = build_app();
    pump(&mut app, &mut rx).await;

    app.show_achievement(Achievement {
        key: "first_steps".to_string(),
        name: "First Steps".to_string(),
        description: "Complete your first lesson".to_string(),
        unlocked: true,
    });
    assert!(app.notifications.achievement().is_some());
    pump(&mut app, &mut rx).await;

    tokio::time::advance(Duration::from_millis(3999)).await;
    pump(&mut app, &mut rx).await;
    assert!(app.notifications.achievement().is_some());

    tokio::time::advance(Duration::from_millis(2)).await;
    pump(&mut app, &mut rx).await;
    assert!(app.notifications.achievement().is_none());
}
