//! Learner progress, achievements, and chart data.

use serde::{Deserialize, Serialize};

/// The learner's progress row. The server is authoritative for leveling;
/// the client only draws it (see [`crate::leveling`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Progress {
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub total_xp: i64,
    #[serde(default)]
    pub current_streak: i64,
    #[serde(default)]
    pub longest_streak: i64,
    #[serde(default)]
    pub lessons_completed: i64,
    #[serde(default)]
    pub quizzes_completed: i64,
    #[serde(default)]
    pub reviews_completed: i64,
    #[serde(default)]
    pub last_activity_date: Option<String>,
}

fn default_level() -> i64 {
    1
}

/// One achievement with its unlock state, from `GET /achievements`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unlocked: bool,
}

/// XP earned on one day, for the progress charts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DailyXp {
    pub date: String,
    #[serde(default)]
    pub xp: i64,
}

/// Response from `GET /progress/charts`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChartData {
    #[serde(default)]
    pub daily_xp: Vec<DailyXp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_defaults() {
        let progress: Progress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress.level, 1);
        assert_eq!(progress.total_xp, 0);
    }

    #[test]
    fn test_progress_full_row() {
        let json = r#"{
            "user_id": 1, "total_xp": 420, "level": 3,
            "current_streak": 5, "longest_streak": 9,
            "lessons_completed": 7, "quizzes_completed": 4, "reviews_completed": 12,
            "last_activity_date": "2026-08-29"
        }"#;
        let progress: Progress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.level, 3);
        assert_eq!(progress.total_xp, 420);
        assert_eq!(progress.current_streak, 5);
    }

    #[test]
    fn test_achievement_unlocked_flag() {
        let json = r#"{"key": "streak_3", "name": "On a Roll",
                       "description": "3-day learning streak", "unlocked": true}"#;
        let achievement: Achievement = serde_json::from_str(json).unwrap();
        assert!(achievement.unlocked);
    }
}
