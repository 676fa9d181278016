//! Lesson types, including the client-side parse of stored lesson content.

use serde::{Deserialize, Serialize};

/// A lesson row as the server returns it. `content_json` is a nested JSON
/// string that the client parses into [`LessonContent`] on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub id: i64,
    pub skill_id: i64,
    pub topic: String,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub content_json: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub estimated_minutes: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Lesson {
    /// Whether the learner has completed this lesson.
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed")
    }

    /// Whether the lesson body has been generated yet.
    pub fn has_content(&self) -> bool {
        self.content_json.as_deref().map_or(false, |c| !c.is_empty())
    }

    /// Parse the stored content JSON. A malformed string is a client-side
    /// parse failure surfaced to the caller, not a panic.
    pub fn parse_content(&self) -> Result<LessonContent, serde_json::Error> {
        let raw = self.content_json.as_deref().unwrap_or("{}");
        serde_json::from_str(raw)
    }
}

/// Structured lesson body generated by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LessonContent {
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub sections: Vec<LessonSection>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// One titled markdown section of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
}

/// A practice exercise embedded in a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub starter_code: Option<String>,
}

/// Request body for `POST /lessons/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct LessonGenerateRequest {
    pub skill_id: i64,
    pub lesson_id: i64,
}

/// Request body for `POST /exercises/run`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseRunRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response from `POST /exercises/run`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExerciseRunResult {
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for `POST /exercises/evaluate`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseEvaluateRequest {
    pub exercise: Exercise,
    pub submission: String,
    pub output: String,
}

/// Response from `POST /exercises/evaluate`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExerciseEvaluation {
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub xp_earned: i64,
    #[serde(default)]
    pub new_achievements: Vec<crate::models::Achievement>,
}

/// Request body for `POST /lessons/{id}/feedback`.
#[derive(Debug, Clone, Serialize)]
pub struct LessonFeedbackRequest {
    pub rating: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Response from `GET /lessons/{id}/feedback`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LessonFeedback {
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Response from `POST /lessons/{id}/explain`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Explanation {
    #[serde(default)]
    pub explanation: String,
}
