//! Quiz types and the answer map sent back on submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single quiz question. `question_type` distinguishes multiple choice
/// (checked client-side) from short answer (graded by the server).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    #[serde(default, rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Kind of question in a quiz.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    ShortAnswer,
}

/// Response from `GET`/`POST /lessons/{id}/quiz`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Quiz {
    #[serde(default)]
    pub quiz_id: i64,
    #[serde(default)]
    pub skill_id: Option<i64>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A recorded answer to one question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub answer: String,
    pub correct: bool,
}

/// Request body for `POST /quizzes/grade` (free-text grading).
#[derive(Debug, Clone, Serialize)]
pub struct GradeRequest {
    pub question: Question,
    pub answer: String,
}

/// Response from `POST /quizzes/grade`. The grader is trusted as ground truth.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeResult {
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub feedback: String,
}

/// Request body for `POST /quizzes/submit`. Answers are keyed by question
/// index; a BTreeMap keeps the serialized order stable.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSubmitRequest {
    pub quiz_id: i64,
    pub answers: BTreeMap<usize, Answer>,
    pub score: f64,
}

/// Response from `POST /quizzes/submit` with authoritative XP/achievements.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuizSubmitResult {
    #[serde(default)]
    pub xp_earned: i64,
    #[serde(default)]
    pub new_achievements: Vec<crate::models::Achievement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_defaults_to_multiple_choice() {
        let q: Question =
            serde_json::from_str(r#"{"question": "2+2?", "options": ["3", "4"]}"#).unwrap();
        assert_eq!(q.question_type, QuestionType::MultipleChoice);
    }

    #[test]
    fn test_short_answer_type_parses() {
        let q: Question =
            serde_json::from_str(r#"{"type": "short_answer", "question": "Explain"}"#).unwrap();
        assert_eq!(q.question_type, QuestionType::ShortAnswer);
        assert!(q.options.is_empty());
    }

    #[test]
    fn test_submit_request_serializes_indexed_answers() {
        let mut answers = BTreeMap::new();
        answers.insert(
            0,
            Answer {
                answer: "B".to_string(),
                correct: true,
            },
        );
        let req = QuizSubmitRequest {
            quiz_id: 7,
            answers,
            score: 1.0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["quiz_id"], 7);
        assert_eq!(json["answers"]["0"]["correct"], true);
        assert_eq!(json["score"], 1.0);
    }
}
