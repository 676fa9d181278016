//! Message and effect handling for the event loop.

use tracing::{debug, warn};

use crate::models::Achievement;
use crate::notifications::{ToastKind, ACHIEVEMENT_DURATION, TOAST_DURATION};

use super::messages::{AppMessage, Effect};
use super::App;

impl App {
    /// Apply one message from the channel. Refresh results land in arrival
    /// order with no sequencing between overlapping refreshes.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::DashboardRefreshed {
                skills,
                progress,
                review_count,
            } => {
                if let Some(skills) = skills {
                    self.skills = skills;
                }
                if let Some(progress) = progress {
                    self.progress = Some(progress);
                }
                self.review_count = review_count;
                self.mark_dirty();
            }
            AppMessage::NavbarRefreshed {
                progress,
                review_count,
            } => {
                if let Some(progress) = progress {
                    self.progress = Some(progress);
                }
                self.review_count = review_count;
                self.mark_dirty();
            }
            AppMessage::ToastExpired { generation } => {
                self.notifications.expire_toast(generation);
                self.mark_dirty();
            }
            AppMessage::AchievementExpired { generation } => {
                self.notifications.expire_achievement(generation);
                self.mark_dirty();
            }
            AppMessage::View { generation, event } => {
                if generation != self.view_generation {
                    debug!("discarding stale view event from generation {generation}");
                    return;
                }
                let effects = self.view.apply(event, &self.storage);
                self.run_effects(effects);
                self.mark_dirty();
            }
        }
    }

    pub fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(route) => self.navigate(route),
                Effect::RefreshNavbar => self.spawn_navbar_refresh(),
                Effect::Toast { message, kind } => self.show_toast(message, kind),
                Effect::Achievements(achievements) => {
                    for achievement in achievements {
                        self.show_achievement(achievement);
                    }
                }
                Effect::ClearDraft {
                    lesson_id,
                    exercise_index,
                } => {
                    if let Err(e) = self.storage.clear_draft(lesson_id, exercise_index) {
                        warn!("failed to clear exercise draft: {e:?}");
                    }
                }
            }
        }
    }

    /// Show a toast and spawn its expiry timer, tagged with the slot
    /// generation so it cannot clear a newer toast.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let generation = self.notifications.show_toast(message, kind);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            let _ = tx.send(AppMessage::ToastExpired { generation });
        });
        self.mark_dirty();
    }

    pub fn show_achievement(&mut self, achievement: Achievement) {
        let generation = self
            .notifications
            .show_achievement(achievement.name, achievement.description);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ACHIEVEMENT_DURATION).await;
            let _ = tx.send(AppMessage::AchievementExpired { generation });
        });
        self.mark_dirty();
    }
}
