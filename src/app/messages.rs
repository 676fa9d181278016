//! AppMessage enum for async communication within the application.
//!
//! Spawned fetch tasks never touch state directly; they send one of these
//! back to the event loop. View-scoped results are wrapped in
//! [`AppMessage::View`] with the mount generation of the view that spawned
//! them, so a response arriving after navigation is discarded instead of
//! mutating a torn-down view.

use crate::models::{
    Achievement, ChartData, ChatHistory, ChatReply, CurriculumPreview, ExerciseEvaluation,
    ExerciseRunResult, Explanation, GradeResult, Lesson, LessonFeedback, Progress, ProjectBrief,
    ProjectEvaluation, ProjectSubmission, Quiz, QuizSubmitResult, RateResult, Skill, SkillCreated,
    SkillDetail,
};
use crate::notifications::ToastKind;
use crate::router::Route;

/// Messages received from async operations and timers.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Full dashboard refresh finished. `None` fields failed and keep their
    /// previously cached values; a failed review fetch degrades to count 0.
    DashboardRefreshed {
        skills: Option<Vec<Skill>>,
        progress: Option<Progress>,
        review_count: usize,
    },
    /// Navbar-only refresh finished (progress + review count, skills stale).
    NavbarRefreshed {
        progress: Option<Progress>,
        review_count: usize,
    },
    /// A toast's expiry timer fired.
    ToastExpired { generation: u64 },
    /// An achievement popup's expiry timer fired.
    AchievementExpired { generation: u64 },
    /// A view-scoped async result, valid only for the given mount generation.
    View { generation: u64, event: ViewEvent },
}

/// Results of view-spawned requests.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    CurriculumPreviewed(Result<CurriculumPreview, String>),
    SkillCreated(Result<SkillCreated, String>),
    SkillDetailLoaded(Result<SkillDetail, String>),
    SkillDeleted(Result<(), String>),
    LessonGenerated(Result<Lesson, String>),
    LessonLoaded(Result<Lesson, String>),
    /// Lesson marked complete and its quiz generated; carries the lesson id.
    QuizReady(Result<i64, String>),
    ExerciseRan {
        index: usize,
        result: Result<ExerciseRunResult, String>,
    },
    ExerciseEvaluated {
        index: usize,
        result: Result<ExerciseEvaluation, String>,
    },
    ExplanationLoaded(Result<Explanation, String>),
    FeedbackLoaded(Result<LessonFeedback, String>),
    FeedbackSaved(Result<(), String>),
    CheatsheetLoaded(Result<String, String>),
    ProjectLoaded(Result<ProjectBrief, String>),
    SubmissionsLoaded(Result<Vec<ProjectSubmission>, String>),
    ProjectEvaluated(Result<ProjectEvaluation, String>),
    QuizLoaded(Result<Quiz, String>),
    AnswerGraded(Result<GradeResult, String>),
    QuizSubmitted(Result<QuizSubmitResult, String>),
    ChatHistoryLoaded {
        skill_name: Option<String>,
        history: Result<ChatHistory, String>,
    },
    ChatReplyReceived(Result<ChatReply, String>),
    ReviewQueueLoaded(Result<crate::models::ReviewQueue, String>),
    CardRated(Result<RateResult, String>),
    ProgressStatsLoaded {
        stats: Result<Progress, String>,
        achievements: Result<Vec<Achievement>, String>,
        charts: Result<ChartData, String>,
    },
}

/// Side effects a view hands back to the app after applying an event.
///
/// This replaces the original design's global mutable hook table: instead of
/// a child overwriting process-wide function slots, it returns explicit
/// effects that the owning app interprets.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Navigate to a route (counts as forward navigation).
    Navigate(Route),
    /// Re-fetch progress and review count only.
    RefreshNavbar,
    /// Show a transient toast.
    Toast { message: String, kind: ToastKind },
    /// Announce newly unlocked achievements.
    Achievements(Vec<Achievement>),
    /// Clear a persisted exercise draft after a correct submission.
    ClearDraft { lesson_id: i64, exercise_index: usize },
}
