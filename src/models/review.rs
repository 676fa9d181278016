//! Spaced-repetition review types. The scheduling algorithm lives on the
//! server; the client only displays cards and posts quality ratings.

use serde::{Deserialize, Serialize};

/// A due flashcard from the review queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewCard {
    pub id: i64,
    #[serde(default)]
    pub lesson_id: Option<i64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub lesson_topic: Option<String>,
    #[serde(default)]
    pub next_review_at: Option<String>,
    #[serde(default)]
    pub repetitions: Option<i64>,
}

/// Response from `GET /review/queue`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReviewQueue {
    #[serde(default)]
    pub cards: Vec<ReviewCard>,
}

/// Recall quality rating, mapped to the server's 0/3/4/5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Again,
    Hard,
    Good,
    Easy,
}

impl Quality {
    /// The numeric value the server expects.
    pub fn as_i64(self) -> i64 {
        match self {
            Quality::Again => 0,
            Quality::Hard => 3,
            Quality::Good => 4,
            Quality::Easy => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quality::Again => "Again",
            Quality::Hard => "Hard",
            Quality::Good => "Good",
            Quality::Easy => "Easy",
        }
    }
}

/// Request body for `POST /review/{id}/rate`.
#[derive(Debug, Clone, Serialize)]
pub struct RateRequest {
    pub quality: i64,
}

/// Response from `POST /review/{id}/rate`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RateResult {
    #[serde(default)]
    pub xp_earned: i64,
    #[serde(default)]
    pub next_review_days: i64,
    #[serde(default)]
    pub new_achievements: Vec<crate::models::Achievement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_values_match_server_scale() {
        assert_eq!(Quality::Again.as_i64(), 0);
        assert_eq!(Quality::Hard.as_i64(), 3);
        assert_eq!(Quality::Good.as_i64(), 4);
        assert_eq!(Quality::Easy.as_i64(), 5);
    }

    #[test]
    fn test_queue_with_joined_topic() {
        let json = r#"{"cards": [{
            "id": 9, "lesson_id": 4,
            "question": "What is ownership?",
            "answer": "One owner per value.",
            "lesson_topic": "Ownership"
        }]}"#;
        let queue: ReviewQueue = serde_json::from_str(json).unwrap();
        assert_eq!(queue.cards.len(), 1);
        assert_eq!(queue.cards[0].lesson_topic.as_deref(), Some("Ownership"));
    }

    #[test]
    fn test_empty_queue_default() {
        let queue: ReviewQueue = serde_json::from_str("{}").unwrap();
        assert!(queue.cards.is_empty());
    }
}
