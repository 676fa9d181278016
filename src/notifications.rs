//! Transient in-app notifications: toasts and achievement popups.
//!
//! Both are single-slot with a bounded visible lifetime. Each `show` bumps a
//! monotonic generation and arms a fresh expiry timer tagged with that
//! generation; an expiry only clears the slot when its generation still
//! matches, so a stale timer can never dismiss a newer message.

use std::time::Duration;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// How long an achievement popup stays visible.
pub const ACHIEVEMENT_DURATION: Duration = Duration::from_secs(4);

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

/// A visible toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// A visible achievement popup.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementPopup {
    pub name: String,
    pub description: String,
}

/// Notification state owned by the app.
#[derive(Debug, Default)]
pub struct Notifications {
    toast: Option<Toast>,
    toast_generation: u64,
    achievement: Option<AchievementPopup>,
    achievement_generation: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any current one. Returns the generation the
    /// caller must hand to the expiry timer.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.toast_generation += 1;
        self.toast = Some(Toast {
            message: message.into(),
            kind,
        });
        self.toast_generation
    }

    /// Clear the toast if `generation` is still current.
    pub fn expire_toast(&mut self, generation: u64) {
        if generation == self.toast_generation {
            self.toast = None;
        }
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Show an achievement popup, replacing any current one.
    pub fn show_achievement(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        self.achievement_generation += 1;
        self.achievement = Some(AchievementPopup {
            name: name.into(),
            description: description.into(),
        });
        self.achievement_generation
    }

    /// Clear the achievement popup if `generation` is still current.
    pub fn expire_achievement(&mut self, generation: u64) {
        if generation == self.achievement_generation {
            self.achievement = None;
        }
    }

    pub fn achievement(&self) -> Option<&AchievementPopup> {
        self.achievement.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_with_matching_generation() {
        let mut notifications = Notifications::new();
        let generation = notifications.show_toast("saved", ToastKind::Success);
        assert!(notifications.toast().is_some());

        notifications.expire_toast(generation);
        assert!(notifications.toast().is_none());
    }

    #[test]
    fn test_stale_timer_cannot_clear_newer_toast() {
        let mut notifications = Notifications::new();
        let first = notifications.show_toast("first", ToastKind::Info);
        let _second = notifications.show_toast("second", ToastKind::Info);

        // The first toast's timer fires after it was replaced
        notifications.expire_toast(first);
        assert_eq!(notifications.toast().unwrap().message, "second");
    }

    #[test]
    fn test_second_toast_replaces_first() {
        let mut notifications = Notifications::new();
        notifications.show_toast("first", ToastKind::Info);
        notifications.show_toast("second", ToastKind::Error);

        let toast = notifications.toast().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_achievement_single_slot() {
        let mut notifications = Notifications::new();
        let first = notifications.show_achievement("First Steps", "Complete a lesson");
        notifications.show_achievement("Week Warrior", "7-day streak");

        notifications.expire_achievement(first);
        assert_eq!(notifications.achievement().unwrap().name, "Week Warrior");
    }
}
