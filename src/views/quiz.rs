//! Quiz view: per-question Unanswered → Answered(correct|incorrect) →
//! Next | Finished.
//!
//! Multiple choice is checked locally against the server-supplied correct
//! answer; short answers go to the grading endpoint, whose verdict is
//! trusted as-is. Finishing computes score = correct / total and submits it
//! once; the server's response carries the authoritative XP and unlocks.

use std::collections::BTreeMap;

use crate::app::messages::{Effect, ViewEvent};
use crate::input::InputField;
use crate::models::{Answer, GradeRequest, QuestionType, Quiz, QuizSubmitRequest, QuizSubmitResult};

use super::ViewContext;

pub struct QuizView {
    ctx: ViewContext,
    pub lesson_id: i64,
    pub quiz: Option<Quiz>,
    pub loading: bool,
    pub error: Option<String>,
    pub current: usize,
    pub answers: BTreeMap<usize, Answer>,
    pub feedback: BTreeMap<usize, String>,
    /// Option cursor for multiple choice.
    pub selected_option: usize,
    pub answer_input: InputField,
    pub grading: bool,
    pub grade_error: Option<String>,
    /// Short answer awaiting a grading verdict.
    pending_answer: Option<String>,
    /// One-shot finish guard; set before the submit request is spawned.
    pub submitted: bool,
    pub result: Option<QuizSubmitResult>,
    pub submit_error: Option<String>,
}

impl QuizView {
    pub fn mount(lesson_id: i64, ctx: ViewContext) -> Self {
        let view = Self {
            ctx,
            lesson_id,
            quiz: None,
            loading: true,
            error: None,
            current: 0,
            answers: BTreeMap::new(),
            feedback: BTreeMap::new(),
            selected_option: 0,
            answer_input: InputField::new(),
            grading: false,
            grade_error: None,
            pending_answer: None,
            submitted: false,
            result: None,
            submit_error: None,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.quiz_for_lesson(lesson_id).await;
            ctx.send(ViewEvent::QuizLoaded(result.map_err(|e| e.to_string())));
        });
        view
    }

    fn question_count(&self) -> usize {
        self.quiz.as_ref().map_or(0, |q| q.questions.len())
    }

    pub fn current_answered(&self) -> bool {
        self.answers.contains_key(&self.current)
    }

    pub fn is_last_question(&self) -> bool {
        self.question_count() > 0 && self.current + 1 == self.question_count()
    }

    pub fn select_next_option(&mut self) {
        if let Some(question) = self.quiz.as_ref().and_then(|q| q.questions.get(self.current)) {
            if self.selected_option + 1 < question.options.len() {
                self.selected_option += 1;
            }
        }
    }

    pub fn select_prev_option(&mut self) {
        self.selected_option = self.selected_option.saturating_sub(1);
    }

    /// Answer the current question: local check for multiple choice, remote
    /// grading for short answers.
    pub fn check_answer(&mut self) {
        if self.current_answered() || self.grading {
            return;
        }
        let index = self.current;
        let question = match self.quiz.as_ref().and_then(|q| q.questions.get(index)) {
            Some(q) => q.clone(),
            None => return,
        };
        match question.question_type {
            QuestionType::MultipleChoice => {
                let answer = match question.options.get(self.selected_option) {
                    Some(a) => a.clone(),
                    None => return,
                };
                let correct_answer = question.correct_answer.clone().unwrap_or_default();
                let correct = answer == correct_answer;
                let feedback = if correct {
                    question
                        .explanation
                        .clone()
                        .unwrap_or_else(|| "Correct!".to_string())
                } else {
                    match question.explanation.as_deref().filter(|e| !e.is_empty()) {
                        Some(explanation) => format!(
                            "Incorrect. The correct answer is: {}. {}",
                            correct_answer, explanation
                        ),
                        None => format!("Incorrect. The correct answer is: {}", correct_answer),
                    }
                };
                self.answers.insert(index, Answer { answer, correct });
                self.feedback.insert(index, feedback);
            }
            QuestionType::ShortAnswer => {
                let answer = self.answer_input.text().trim().to_string();
                if answer.is_empty() {
                    return;
                }
                self.grading = true;
                self.grade_error = None;
                let request = GradeRequest {
                    question,
                    answer: answer.clone(),
                };
                let ctx = self.ctx.clone();
                tokio::spawn(async move {
                    let result = ctx.client.grade_answer(&request).await;
                    ctx.send(ViewEvent::AnswerGraded(result.map_err(|e| e.to_string())));
                });
                self.pending_answer = Some(answer);
            }
        }
    }

    /// Advance to the next question, resetting per-question input state.
    pub fn next_question(&mut self) {
        if !self.current_answered() || self.is_last_question() {
            return;
        }
        self.current += 1;
        self.selected_option = 0;
        self.answer_input.clear();
        self.grade_error = None;
    }

    /// Submit the finished quiz exactly once.
    pub fn finish(&mut self) {
        if self.submitted {
            return;
        }
        let quiz = match &self.quiz {
            Some(q) if !q.questions.is_empty() => q,
            _ => return,
        };
        if self.answers.len() < quiz.questions.len() {
            return;
        }
        self.submitted = true;
        self.submit_error = None;
        let correct = self.answers.values().filter(|a| a.correct).count();
        let request = QuizSubmitRequest {
            quiz_id: quiz.quiz_id,
            answers: self.answers.clone(),
            score: correct as f64 / quiz.questions.len() as f64,
        };
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.submit_quiz(&request).await;
            ctx.send(ViewEvent::QuizSubmitted(result.map_err(|e| e.to_string())));
        });
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::QuizLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(quiz) => self.quiz = Some(quiz),
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::AnswerGraded(result) => {
                self.grading = false;
                let index = self.current;
                let answer = self.pending_answer.take().unwrap_or_default();
                match result {
                    Ok(grade) => {
                        self.answers.insert(
                            index,
                            Answer {
                                answer,
                                correct: grade.correct,
                            },
                        );
                        self.feedback.insert(index, grade.feedback);
                    }
                    // Grading is not retried automatically; the answer stays
                    // editable.
                    Err(e) => self.grade_error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::QuizSubmitted(result) => match result {
                Ok(submit) => {
                    let mut effects = vec![Effect::RefreshNavbar];
                    if !submit.new_achievements.is_empty() {
                        effects.push(Effect::Achievements(submit.new_achievements.clone()));
                    }
                    self.result = Some(submit);
                    effects
                }
                Err(e) => {
                    self.submitted = false;
                    self.submit_error = Some(e);
                    Vec::new()
                }
            },
            _ => Vec::new(),
        }
    }
}
