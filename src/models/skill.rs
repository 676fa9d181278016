//! Skill and curriculum types.

use serde::{Deserialize, Serialize};

/// A skill the learner is studying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A single topic in a generated curriculum preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurriculumTopic {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Server-generated curriculum preview, shown before the learner commits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurriculumPreview {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<CurriculumTopic>,
}

/// Request body for `POST /skills/preview`.
#[derive(Debug, Clone, Serialize)]
pub struct SkillPreviewRequest {
    pub name: String,
}

/// Request body for `POST /skills`.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCreateRequest {
    pub name: String,
    pub description: String,
    pub curriculum: Vec<CurriculumTopic>,
}

/// Response from `POST /skills`.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillCreated {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response from `GET /skills/{id}`: the skill plus its lesson plan.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SkillDetail {
    #[serde(default)]
    pub skill: Option<Skill>,
    #[serde(default)]
    pub lessons: Vec<crate::models::Lesson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_deserializes_with_minimal_fields() {
        let skill: Skill = serde_json::from_str(r#"{"id": 3, "name": "Rust"}"#).unwrap();
        assert_eq!(skill.id, 3);
        assert_eq!(skill.name, "Rust");
        assert!(skill.description.is_none());
    }

    #[test]
    fn test_curriculum_preview_deserializes() {
        let json = r#"{
            "name": "Chess Strategy",
            "description": "From openings to endgames",
            "topics": [
                {"title": "Openings", "description": "First moves"},
                {"title": "Tactics"}
            ]
        }"#;
        let preview: CurriculumPreview = serde_json::from_str(json).unwrap();
        assert_eq!(preview.topics.len(), 2);
        assert_eq!(preview.topics[0].title, "Openings");
        assert!(preview.topics[1].description.is_none());
    }

    #[test]
    fn test_skill_detail_tolerates_missing_skill() {
        let detail: SkillDetail = serde_json::from_str(r#"{"lessons": []}"#).unwrap();
        assert!(detail.skill.is_none());
        assert!(detail.lessons.is_empty());
    }
}
