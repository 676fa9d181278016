//! Data models for the Mentor API.
//!
//! All of these are transient client-side state, rehydrated from the server
//! on navigation. Serde defaults are deliberately permissive: the server
//! returns bare database rows and older rows may miss newer columns.

pub mod chat;
pub mod lesson;
pub mod progress;
pub mod project;
pub mod quiz;
pub mod review;
pub mod skill;

pub use chat::{ChatHistory, ChatMessage, ChatReply, ChatRequest, ChatRole};
pub use lesson::{
    Exercise, ExerciseEvaluateRequest, ExerciseEvaluation, ExerciseRunRequest, ExerciseRunResult,
    Explanation, Lesson, LessonContent, LessonFeedback, LessonFeedbackRequest,
    LessonGenerateRequest, LessonSection,
};
pub use progress::{Achievement, ChartData, DailyXp, Progress};
pub use project::{ProjectBrief, ProjectEvaluation, ProjectSubmission, ProjectSubmitRequest};
pub use quiz::{
    Answer, GradeRequest, GradeResult, Question, QuestionType, Quiz, QuizSubmitRequest,
    QuizSubmitResult,
};
pub use review::{Quality, RateRequest, RateResult, ReviewCard, ReviewQueue};
pub use skill::{
    CurriculumPreview, CurriculumTopic, Skill, SkillCreateRequest, SkillCreated, SkillDetail,
    SkillPreviewRequest,
};
