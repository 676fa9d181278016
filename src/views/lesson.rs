//! Lesson view: structured content (objective, sections, summary), an
//! exercise editor per exercise with run/evaluate actions, an "explain"
//! prompt, and lesson feedback.
//!
//! Exercise drafts are debounce-saved: edits mark the exercise dirty and the
//! tick handler flushes dirty drafts once the last edit is old enough. A
//! correct evaluation clears the stored draft.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::app::messages::{Effect, ViewEvent};
use crate::input::InputField;
use crate::models::{
    Exercise, ExerciseEvaluateRequest, ExerciseRunRequest, Lesson, LessonContent,
    LessonFeedbackRequest,
};
use crate::notifications::ToastKind;
use crate::router::Route;
use crate::storage::Storage;

use super::ViewContext;

const DRAFT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Mutable state for one exercise editor.
pub struct ExerciseState {
    pub exercise: Exercise,
    pub input: InputField,
    pub output: Option<String>,
    pub run_error: Option<String>,
    pub feedback: Option<String>,
    pub hints: Vec<String>,
    pub correct: bool,
    pub running: bool,
    pub submitting: bool,
    dirty_at: Option<Instant>,
}

impl ExerciseState {
    fn new(exercise: Exercise, draft: Option<String>) -> Self {
        let initial = draft
            .or_else(|| exercise.starter_code.clone())
            .unwrap_or_default();
        Self {
            exercise,
            input: InputField::multiline_with_text(&initial),
            output: None,
            run_error: None,
            feedback: None,
            hints: Vec::new(),
            correct: false,
            running: false,
            submitting: false,
            dirty_at: None,
        }
    }

    /// Called after every accepted edit keystroke.
    pub fn mark_dirty(&mut self) {
        self.dirty_at = Some(Instant::now());
    }
}

pub struct LessonView {
    ctx: ViewContext,
    pub lesson_id: i64,
    pub lesson: Option<Lesson>,
    pub content: Option<LessonContent>,
    pub loading: bool,
    pub error: Option<String>,
    pub exercises: Vec<ExerciseState>,
    /// Index of the exercise being edited, if the editor has focus.
    pub focused_exercise: Option<usize>,
    /// True while the explain prompt has keyboard focus.
    pub explain_focused: bool,
    pub explain_input: InputField,
    pub explanation: Option<String>,
    pub explaining: bool,
    pub explain_error: Option<String>,
    pub feedback_rating: Option<i64>,
    pub saving_feedback: bool,
    pub feedback_saved: bool,
    /// Set while completing the lesson and generating its quiz.
    pub starting_quiz: bool,
    pub quiz_error: Option<String>,
}

impl LessonView {
    pub fn mount(lesson_id: i64, ctx: ViewContext, _storage: &Storage) -> Self {
        let view = Self {
            ctx,
            lesson_id,
            lesson: None,
            content: None,
            loading: true,
            error: None,
            exercises: Vec::new(),
            focused_exercise: None,
            explain_focused: false,
            explain_input: InputField::new(),
            explanation: None,
            explaining: false,
            explain_error: None,
            feedback_rating: None,
            saving_feedback: false,
            feedback_saved: false,
            starting_quiz: false,
            quiz_error: None,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let lesson = ctx.client.lesson(lesson_id).await;
            ctx.send(ViewEvent::LessonLoaded(lesson.map_err(|e| e.to_string())));
            let feedback = ctx.client.lesson_feedback(lesson_id).await;
            ctx.send(ViewEvent::FeedbackLoaded(
                feedback.map_err(|e| e.to_string()),
            ));
        });
        view
    }

    /// Execute the exercise code server-side and show its output.
    pub fn run_exercise(&mut self, index: usize) {
        let state = match self.exercises.get_mut(index) {
            Some(s) if !s.running => s,
            _ => return,
        };
        state.running = true;
        state.run_error = None;
        let request = ExerciseRunRequest {
            code: state.input.text(),
            language: state.exercise.language.clone(),
        };
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.run_exercise(&request).await;
            ctx.send(ViewEvent::ExerciseRan {
                index,
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Submit the exercise for AI evaluation.
    pub fn submit_exercise(&mut self, index: usize) {
        let state = match self.exercises.get_mut(index) {
            Some(s) if !s.submitting => s,
            _ => return,
        };
        state.submitting = true;
        let request = ExerciseEvaluateRequest {
            exercise: state.exercise.clone(),
            submission: state.input.text(),
            output: state.output.clone().unwrap_or_default(),
        };
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.evaluate_exercise(&request).await;
            ctx.send(ViewEvent::ExerciseEvaluated {
                index,
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    /// Ask for an explanation of the entered question in this lesson's
    /// context.
    pub fn ask_explanation(&mut self) {
        let question = self.explain_input.text().trim().to_string();
        if question.is_empty() || self.explaining {
            return;
        }
        self.explaining = true;
        self.explain_error = None;
        let lesson_id = self.lesson_id;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.explain(lesson_id, &question).await;
            ctx.send(ViewEvent::ExplanationLoaded(
                result.map_err(|e| e.to_string()),
            ));
        });
    }

    /// Rate the lesson 1-5. Saves immediately.
    pub fn rate_lesson(&mut self, rating: i64) {
        if self.saving_feedback {
            return;
        }
        self.saving_feedback = true;
        self.feedback_rating = Some(rating);
        let request = LessonFeedbackRequest {
            rating,
            comment: None,
        };
        let lesson_id = self.lesson_id;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.send_lesson_feedback(lesson_id, &request).await;
            ctx.send(ViewEvent::FeedbackSaved(result.map_err(|e| e.to_string())));
        });
    }

    /// Mark the lesson complete and generate its quiz, then navigate to it.
    pub fn start_quiz(&mut self) {
        if self.starting_quiz {
            return;
        }
        self.starting_quiz = true;
        self.quiz_error = None;
        let lesson_id = self.lesson_id;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = async {
                ctx.client.complete_lesson(lesson_id).await?;
                ctx.client.generate_quiz(lesson_id).await?;
                Ok::<_, crate::api::ApiError>(lesson_id)
            }
            .await;
            ctx.send(ViewEvent::QuizReady(result.map_err(|e| e.to_string())));
        });
    }

    /// Persist any draft whose last edit is older than the debounce window.
    pub fn flush_drafts(&mut self, storage: &Storage) {
        self.flush(storage, false);
    }

    /// Persist every dirty draft regardless of age. Called when the view is
    /// about to go away (navigation, quit) so edits inside the debounce
    /// window are not lost.
    pub fn flush_all_drafts(&mut self, storage: &Storage) {
        self.flush(storage, true);
    }

    fn flush(&mut self, storage: &Storage, force: bool) {
        for (index, state) in self.exercises.iter_mut().enumerate() {
            let due = state
                .dirty_at
                .is_some_and(|at| force || at.elapsed() >= DRAFT_DEBOUNCE);
            if due {
                state.dirty_at = None;
                if let Err(e) = storage.save_draft(self.lesson_id, index, &state.input.text()) {
                    warn!("failed to save exercise draft: {e:?}");
                }
            }
        }
    }

    pub fn apply(&mut self, event: ViewEvent, storage: &Storage) -> Vec<Effect> {
        match event {
            ViewEvent::LessonLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(lesson) => match lesson.parse_content() {
                        Ok(content) => {
                            self.exercises = content
                                .exercises
                                .iter()
                                .enumerate()
                                .map(|(i, ex)| {
                                    let draft = storage.load_draft(lesson.id, i);
                                    ExerciseState::new(ex.clone(), draft)
                                })
                                .collect();
                            self.content = Some(content);
                            self.lesson = Some(lesson);
                        }
                        Err(e) => {
                            self.error = Some(format!("Lesson content is malformed: {e}"));
                            self.lesson = Some(lesson);
                        }
                    },
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::ExerciseRan { index, result } => {
                if let Some(state) = self.exercises.get_mut(index) {
                    state.running = false;
                    match result {
                        Ok(run) => {
                            state.output = Some(run.output);
                            state.run_error = run.error;
                        }
                        Err(e) => state.run_error = Some(e),
                    }
                }
                Vec::new()
            }
            ViewEvent::ExerciseEvaluated { index, result } => {
                let lesson_id = self.lesson_id;
                let state = match self.exercises.get_mut(index) {
                    Some(s) => s,
                    None => return Vec::new(),
                };
                state.submitting = false;
                match result {
                    Ok(eval) => {
                        state.feedback = Some(eval.feedback);
                        state.hints = eval.hints;
                        state.correct = eval.correct;
                        if eval.correct {
                            let mut effects = vec![
                                Effect::ClearDraft {
                                    lesson_id,
                                    exercise_index: index,
                                },
                                Effect::Toast {
                                    message: format!("Correct! +{} XP", eval.xp_earned),
                                    kind: ToastKind::Success,
                                },
                                Effect::RefreshNavbar,
                            ];
                            if !eval.new_achievements.is_empty() {
                                effects.push(Effect::Achievements(eval.new_achievements));
                            }
                            effects
                        } else {
                            Vec::new()
                        }
                    }
                    Err(e) => {
                        state.feedback = Some(e);
                        Vec::new()
                    }
                }
            }
            ViewEvent::ExplanationLoaded(result) => {
                self.explaining = false;
                match result {
                    Ok(explanation) => {
                        self.explanation = Some(explanation.explanation);
                        self.explain_input.clear();
                    }
                    Err(e) => self.explain_error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::FeedbackLoaded(result) => {
                // Missing feedback is normal for an unrated lesson.
                if let Ok(feedback) = result {
                    if self.feedback_rating.is_none() {
                        self.feedback_rating = feedback.rating;
                    }
                }
                Vec::new()
            }
            ViewEvent::FeedbackSaved(result) => {
                self.saving_feedback = false;
                match result {
                    Ok(()) => {
                        self.feedback_saved = true;
                        Vec::new()
                    }
                    Err(_) => vec![Effect::Toast {
                        message: "Could not save rating".to_string(),
                        kind: ToastKind::Error,
                    }],
                }
            }
            ViewEvent::QuizReady(result) => {
                self.starting_quiz = false;
                match result {
                    Ok(lesson_id) => vec![Effect::Navigate(Route::Quiz(lesson_id))],
                    Err(e) => {
                        self.quiz_error = Some(e);
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }
}
