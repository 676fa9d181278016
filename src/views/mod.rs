//! Per-route view-models.
//!
//! Each view owns its route-local state and spawns API calls through its
//! [`ViewContext`]. Exactly one view is mounted at a time; the router drops
//! the old one on navigation and bumps the mount generation, which orphans
//! any responses still in flight (see [`crate::app`]).
//!
//! Views never mutate app-level state. Applying a [`ViewEvent`] returns a
//! list of [`Effect`]s that the app interprets (navigation, refreshes,
//! toasts).

mod chat;
mod cheatsheet;
mod lesson;
mod progress;
mod project;
mod quiz;
mod review;
mod skill_detail;
mod skill_picker;

pub use chat::ChatView;
pub use cheatsheet::CheatsheetView;
pub use lesson::{ExerciseState, LessonView};
pub use progress::ProgressView;
pub use project::ProjectView;
pub use quiz::QuizView;
pub use review::ReviewView;
pub use skill_detail::SkillDetailView;
pub use skill_picker::SkillPickerView;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::app::messages::{AppMessage, Effect, ViewEvent};
use crate::router::Route;
use crate::storage::Storage;

/// Dependencies handed to every view at mount time.
#[derive(Clone)]
pub struct ViewContext {
    /// Shared API client.
    pub client: Arc<ApiClient>,
    /// Channel back to the event loop.
    pub tx: mpsc::UnboundedSender<AppMessage>,
    /// Mount generation this view belongs to.
    pub generation: u64,
}

impl ViewContext {
    /// Send a view-scoped event tagged with this view's generation.
    pub fn send(&self, event: ViewEvent) {
        let _ = self.tx.send(AppMessage::View {
            generation: self.generation,
            event,
        });
    }
}

/// The currently mounted view.
pub enum View {
    /// Dashboard only reads the app-level snapshot; it keeps selection state.
    Dashboard { selected: usize },
    SkillPicker(SkillPickerView),
    SkillDetail(SkillDetailView),
    Lesson(LessonView),
    Quiz(QuizView),
    Chat(ChatView),
    Review(ReviewView),
    Progress(ProgressView),
    Cheatsheet(CheatsheetView),
    Project(ProjectView),
}

impl View {
    /// Mount the view for a route and kick off its primary load.
    pub fn mount(route: Route, ctx: ViewContext, storage: &Storage) -> View {
        match route {
            Route::Dashboard => View::Dashboard { selected: 0 },
            Route::NewSkill => View::SkillPicker(SkillPickerView::new(ctx)),
            Route::Skill(id) => View::SkillDetail(SkillDetailView::mount(id, ctx)),
            Route::Lesson(id) => View::Lesson(LessonView::mount(id, ctx, storage)),
            Route::Quiz(lesson_id) => View::Quiz(QuizView::mount(lesson_id, ctx)),
            Route::Chat(skill_id) => View::Chat(ChatView::mount(skill_id, ctx)),
            Route::Review => View::Review(ReviewView::mount(ctx)),
            Route::Progress => View::Progress(ProgressView::mount(ctx)),
            Route::Cheatsheet(id) => View::Cheatsheet(CheatsheetView::mount(id, ctx)),
            Route::Project(id) => View::Project(ProjectView::mount(id, ctx)),
        }
    }

    /// Apply a view event, returning effects for the app to run.
    pub fn apply(&mut self, event: ViewEvent, storage: &Storage) -> Vec<Effect> {
        match self {
            View::Dashboard { .. } => Vec::new(),
            View::SkillPicker(view) => view.apply(event),
            View::SkillDetail(view) => view.apply(event),
            View::Lesson(view) => view.apply(event, storage),
            View::Quiz(view) => view.apply(event),
            View::Chat(view) => view.apply(event),
            View::Review(view) => view.apply(event),
            View::Progress(view) => view.apply(event),
            View::Cheatsheet(view) => view.apply(event),
            View::Project(view) => view.apply(event),
        }
    }
}
