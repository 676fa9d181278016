//! New-skill flow: name entry → generated curriculum preview → create.

use crate::app::messages::{Effect, ViewEvent};
use crate::input::InputField;
use crate::models::{CurriculumPreview, SkillCreateRequest};
use crate::notifications::ToastKind;
use crate::router::Route;

use super::ViewContext;

pub struct SkillPickerView {
    ctx: ViewContext,
    pub name: InputField,
    pub preview: Option<CurriculumPreview>,
    pub previewing: bool,
    pub creating: bool,
    pub error: Option<String>,
}

impl SkillPickerView {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            name: InputField::new(),
            preview: None,
            previewing: false,
            creating: false,
            error: None,
        }
    }

    /// Ask the server to generate a curriculum preview for the entered name.
    pub fn request_preview(&mut self) {
        let name = self.name.text().trim().to_string();
        if name.is_empty() || self.previewing {
            return;
        }
        self.previewing = true;
        self.error = None;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.preview_skill(&name).await;
            ctx.send(ViewEvent::CurriculumPreviewed(
                result.map_err(|e| e.to_string()),
            ));
        });
    }

    /// Accept the previewed curriculum and create the skill.
    pub fn confirm_create(&mut self) {
        let preview = match &self.preview {
            Some(p) => p.clone(),
            None => return,
        };
        if self.creating {
            return;
        }
        self.creating = true;
        self.error = None;
        let request = SkillCreateRequest {
            name: preview.name,
            description: preview.description,
            curriculum: preview.topics,
        };
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.create_skill(&request).await;
            ctx.send(ViewEvent::SkillCreated(result.map_err(|e| e.to_string())));
        });
    }

    /// Discard the preview and return to name entry.
    pub fn discard_preview(&mut self) {
        self.preview = None;
        self.error = None;
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::CurriculumPreviewed(result) => {
                self.previewing = false;
                match result {
                    Ok(preview) => self.preview = Some(preview),
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::SkillCreated(result) => {
                self.creating = false;
                match result {
                    Ok(created) => vec![
                        Effect::Toast {
                            message: format!("Skill \"{}\" created", created.name),
                            kind: ToastKind::Success,
                        },
                        Effect::Navigate(Route::Skill(created.id)),
                    ],
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::test_ctx;

    #[test]
    fn preview_requires_nonempty_name() {
        let (ctx, _rx) = test_ctx();
        let mut view = SkillPickerView::new(ctx);
        view.request_preview();
        assert!(!view.previewing);
        view.name.set_text("  ");
        view.request_preview();
        assert!(!view.previewing);
    }

    #[test]
    fn preview_failure_sets_inline_error() {
        let (ctx, _rx) = test_ctx();
        let mut view = SkillPickerView::new(ctx);
        let effects = view.apply(ViewEvent::CurriculumPreviewed(Err("boom".into())));
        assert!(effects.is_empty());
        assert_eq!(view.error.as_deref(), Some("boom"));
        assert!(view.preview.is_none());
    }

    #[test]
    fn created_skill_navigates_to_detail() {
        let (ctx, _rx) = test_ctx();
        let mut view = SkillPickerView::new(ctx);
        let effects = view.apply(ViewEvent::SkillCreated(Ok(crate::models::SkillCreated {
            id: 7,
            name: "Rust".into(),
            description: None,
        })));
        assert!(effects.contains(&Effect::Navigate(Route::Skill(7))));
    }
}
