//! Capstone project types.

use serde::{Deserialize, Serialize};

/// A project brief generated for a skill, from `GET /skills/{id}/project`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectBrief {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub evaluation_criteria: Option<String>,
    #[serde(default = "default_submission_type")]
    pub submission_type: String,
}

fn default_submission_type() -> String {
    "text".to_string()
}

/// Request body for `POST /projects/{id}/submit`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSubmitRequest {
    pub submission: String,
}

/// Evaluation returned by `POST /projects/{id}/submit`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectEvaluation {
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub xp_earned: i64,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    #[serde(default)]
    pub score: f64,
}

/// A past submission, from `GET /projects/{id}/submissions`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectSubmission {
    pub id: i64,
    #[serde(default)]
    pub submission: String,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub xp_earned: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}
