//! Skill detail: lesson list for one skill, entry points to lessons,
//! cheat sheet, project, and skill-scoped chat.

use crate::app::messages::{Effect, ViewEvent};
use crate::models::SkillDetail;
use crate::notifications::ToastKind;
use crate::router::Route;

use super::ViewContext;

pub struct SkillDetailView {
    ctx: ViewContext,
    pub skill_id: i64,
    pub detail: Option<SkillDetail>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
    /// Lesson id whose content is being generated, if any.
    pub generating: Option<i64>,
    pub deleting: bool,
    /// Delete needs a second keypress to confirm.
    pub confirm_delete: bool,
}

impl SkillDetailView {
    pub fn mount(skill_id: i64, ctx: ViewContext) -> Self {
        let view = Self {
            ctx,
            skill_id,
            detail: None,
            loading: true,
            error: None,
            selected: 0,
            generating: None,
            deleting: false,
            confirm_delete: false,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.skill_detail(skill_id).await;
            ctx.send(ViewEvent::SkillDetailLoaded(
                result.map_err(|e| e.to_string()),
            ));
        });
        view
    }

    pub fn lesson_count(&self) -> usize {
        self.detail.as_ref().map_or(0, |d| d.lessons.len())
    }

    pub fn select_next(&mut self) {
        let count = self.lesson_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
        self.confirm_delete = false;
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.confirm_delete = false;
    }

    /// Open the selected lesson, generating its content first if the server
    /// has not produced it yet.
    pub fn open_selected(&mut self) -> Vec<Effect> {
        let lesson = match self
            .detail
            .as_ref()
            .and_then(|d| d.lessons.get(self.selected))
        {
            Some(l) => l.clone(),
            None => return Vec::new(),
        };
        if lesson.has_content() {
            return vec![Effect::Navigate(Route::Lesson(lesson.id))];
        }
        if self.generating.is_some() {
            return Vec::new();
        }
        self.generating = Some(lesson.id);
        self.error = None;
        let skill_id = self.skill_id;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.generate_lesson(skill_id, lesson.id).await;
            ctx.send(ViewEvent::LessonGenerated(result.map_err(|e| e.to_string())));
        });
        Vec::new()
    }

    /// First call arms the confirmation, second call deletes.
    pub fn request_delete(&mut self) {
        if self.deleting {
            return;
        }
        if !self.confirm_delete {
            self.confirm_delete = true;
            return;
        }
        self.deleting = true;
        let skill_id = self.skill_id;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.delete_skill(skill_id).await;
            ctx.send(ViewEvent::SkillDeleted(result.map_err(|e| e.to_string())));
        });
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::SkillDetailLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(detail) => self.detail = Some(detail),
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::LessonGenerated(result) => {
                self.generating = None;
                match result {
                    Ok(lesson) => vec![Effect::Navigate(Route::Lesson(lesson.id))],
                    Err(e) => {
                        self.error = Some(e);
                        Vec::new()
                    }
                }
            }
            ViewEvent::SkillDeleted(result) => {
                self.deleting = false;
                self.confirm_delete = false;
                match result {
                    Ok(()) => {
                        let name = self
                            .detail
                            .as_ref()
                            .and_then(|d| d.skill.as_ref())
                            .map_or_else(|| "Skill".to_string(), |s| s.name.clone());
                        vec![
                            Effect::Toast {
                                message: format!("{} deleted", name),
                                kind: ToastKind::Info,
                            },
                            Effect::Navigate(Route::Dashboard),
                        ]
                    }
                    Err(e) => {
                        self.error = Some(e);
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }
}
