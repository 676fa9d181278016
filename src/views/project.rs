//! Capstone project: brief, past submissions, and a text submission that is
//! evaluated server-side.

use crate::app::messages::{Effect, ViewEvent};
use crate::input::InputField;
use crate::models::{ProjectBrief, ProjectEvaluation, ProjectSubmission};
use crate::notifications::ToastKind;

use super::ViewContext;

pub struct ProjectView {
    ctx: ViewContext,
    pub skill_id: i64,
    pub brief: Option<ProjectBrief>,
    pub submissions: Vec<ProjectSubmission>,
    pub loading: bool,
    pub error: Option<String>,
    pub input: InputField,
    /// True while the submission editor has keyboard focus.
    pub editing: bool,
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub evaluation: Option<ProjectEvaluation>,
}

impl ProjectView {
    pub fn mount(skill_id: i64, ctx: ViewContext) -> Self {
        let view = Self {
            ctx,
            skill_id,
            brief: None,
            submissions: Vec::new(),
            loading: true,
            error: None,
            input: InputField::multiline(),
            editing: false,
            submitting: false,
            submit_error: None,
            evaluation: None,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.project(skill_id).await;
            ctx.send(ViewEvent::ProjectLoaded(result.map_err(|e| e.to_string())));
        });
        view
    }

    pub fn submit(&mut self) {
        let project_id = match &self.brief {
            Some(brief) => brief.id,
            None => return,
        };
        let submission = self.input.text();
        if submission.trim().is_empty() || self.submitting {
            return;
        }
        self.submitting = true;
        self.submit_error = None;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.submit_project(project_id, &submission).await;
            ctx.send(ViewEvent::ProjectEvaluated(result.map_err(|e| e.to_string())));
        });
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::ProjectLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(brief) => {
                        let project_id = brief.id;
                        self.brief = Some(brief);
                        let ctx = self.ctx.clone();
                        tokio::spawn(async move {
                            let result = ctx.client.project_submissions(project_id).await;
                            ctx.send(ViewEvent::SubmissionsLoaded(
                                result.map_err(|e| e.to_string()),
                            ));
                        });
                    }
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::SubmissionsLoaded(result) => {
                // Past submissions are supplementary; failures leave the
                // list empty.
                if let Ok(submissions) = result {
                    self.submissions = submissions;
                }
                Vec::new()
            }
            ViewEvent::ProjectEvaluated(result) => {
                self.submitting = false;
                match result {
                    Ok(evaluation) => {
                        let mut effects = vec![Effect::RefreshNavbar];
                        if evaluation.passed {
                            effects.push(Effect::Toast {
                                message: format!(
                                    "Project passed! +{} XP",
                                    evaluation.xp_earned
                                ),
                                kind: ToastKind::Success,
                            });
                        }
                        self.evaluation = Some(evaluation);
                        effects
                    }
                    Err(e) => {
                        self.submit_error = Some(e);
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::test_ctx;

    fn brief(id: i64) -> ProjectBrief {
        ProjectBrief {
            id,
            title: "Build a CLI".into(),
            description: "Ship it".into(),
            requirements: vec!["Parse args".into()],
            evaluation_criteria: None,
            submission_type: "text".into(),
        }
    }

    #[tokio::test]
    async fn submit_requires_brief_and_text() {
        let (ctx, _rx) = test_ctx();
        let mut view = ProjectView::mount(1, ctx);
        view.input.set_text("my writeup");
        view.submit();
        assert!(!view.submitting);
        view.apply(ViewEvent::ProjectLoaded(Ok(brief(10))));
        view.submit();
        assert!(view.submitting);
    }

    #[tokio::test]
    async fn passed_evaluation_refreshes_navbar_and_toasts() {
        let (ctx, _rx) = test_ctx();
        let mut view = ProjectView::mount(1, ctx);
        view.apply(ViewEvent::ProjectLoaded(Ok(brief(10))));
        let effects = view.apply(ViewEvent::ProjectEvaluated(Ok(ProjectEvaluation {
            passed: true,
            xp_earned: 100,
            feedback: "Great".into(),
            strengths: vec![],
            suggestions: vec![],
            areas_for_improvement: vec![],
            score: 0.9,
        })));
        assert!(effects.contains(&Effect::RefreshNavbar));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Toast { kind: ToastKind::Success, .. })));
    }

    #[tokio::test]
    async fn failed_evaluation_is_retryable() {
        let (ctx, _rx) = test_ctx();
        let mut view = ProjectView::mount(1, ctx);
        view.apply(ViewEvent::ProjectLoaded(Ok(brief(10))));
        view.input.set_text("attempt");
        view.submit();
        let effects = view.apply(ViewEvent::ProjectEvaluated(Err("500".into())));
        assert!(effects.is_empty());
        assert!(!view.submitting);
        assert!(view.submit_error.is_some());
    }
}
