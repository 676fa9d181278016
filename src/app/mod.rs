//! Application state: the navigation controller, the dashboard snapshot,
//! notifications, and the single mounted view.

pub mod handlers;
pub mod messages;
pub mod navigation;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::{Progress, Skill};
use crate::notifications::Notifications;
use crate::router::{History, Route};
use crate::storage::Storage;
use crate::views::{View, ViewContext};

pub use messages::AppMessage;

pub struct App {
    pub client: Arc<ApiClient>,
    pub storage: Storage,
    pub route: Route,
    pub history: History,
    /// Dashboard snapshot, refreshed per the navigation protocol.
    pub skills: Vec<Skill>,
    pub progress: Option<Progress>,
    pub review_count: usize,
    pub dark_mode: bool,
    pub notifications: Notifications,
    /// The single mounted view for the current route.
    pub view: View,
    /// Bumped on every mount; stale view messages carry an older value.
    pub view_generation: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    pub scroll: u16,
    pub tick_count: u64,
    needs_redraw: bool,
}

impl App {
    pub fn new(
        client: Arc<ApiClient>,
        storage: Storage,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let dark_mode = storage.load_settings().dark_mode;
        let view_generation = 1;
        let view = View::mount(
            Route::Dashboard,
            ViewContext {
                client: Arc::clone(&client),
                tx: message_tx.clone(),
                generation: view_generation,
            },
            &storage,
        );
        let app = Self {
            client,
            storage,
            route: Route::Dashboard,
            history: History::new(Route::Dashboard),
            skills: Vec::new(),
            progress: None,
            review_count: 0,
            dark_mode,
            notifications: Notifications::new(),
            view,
            view_generation,
            message_tx,
            should_quit: false,
            scroll: 0,
            tick_count: 0,
            needs_redraw: true,
        };
        app.spawn_full_refresh();
        app
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Consume the dirty flag; the event loop draws when this returns true.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn quit(&mut self) {
        if let View::Lesson(lesson) = &mut self.view {
            lesson.flush_all_drafts(&self.storage);
        }
        self.should_quit = true;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        let mut settings = self.storage.load_settings();
        settings.dark_mode = self.dark_mode;
        if let Err(e) = self.storage.save_settings(&settings) {
            tracing::warn!("failed to persist dark mode: {e:?}");
        }
        self.mark_dirty();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
        self.mark_dirty();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.mark_dirty();
    }

    /// True when some spinner or timer is visible and the UI should redraw
    /// on ticks.
    pub fn is_animating(&self) -> bool {
        if self.notifications.toast().is_some() || self.notifications.achievement().is_some() {
            return true;
        }
        match &self.view {
            View::Dashboard { .. } => false,
            View::SkillPicker(v) => v.previewing || v.creating,
            View::SkillDetail(v) => v.loading || v.generating.is_some() || v.deleting,
            View::Lesson(v) => {
                v.loading
                    || v.explaining
                    || v.starting_quiz
                    || v.exercises.iter().any(|e| e.running || e.submitting)
            }
            View::Quiz(v) => v.loading || v.grading,
            View::Chat(v) => v.loading || v.thinking,
            View::Review(v) => v.loading || v.rating,
            View::Progress(v) => v.loading,
            View::Cheatsheet(v) => v.loading || v.regenerating,
            View::Project(v) => v.loading || v.submitting,
        }
    }

    /// 16 ms tick: drives spinners and flushes debounced drafts.
    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let View::Lesson(lesson) = &mut self.view {
            lesson.flush_drafts(&self.storage);
        }
        if self.is_animating() {
            self.mark_dirty();
        }
    }
}
