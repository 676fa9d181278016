//! Skill cheat sheet: a single server-generated markdown document with a
//! regenerate action.

use crate::app::messages::{Effect, ViewEvent};

use super::ViewContext;

pub struct CheatsheetView {
    ctx: ViewContext,
    pub skill_id: i64,
    pub content: Option<String>,
    pub loading: bool,
    pub regenerating: bool,
    pub error: Option<String>,
}

impl CheatsheetView {
    pub fn mount(skill_id: i64, ctx: ViewContext) -> Self {
        let view = Self {
            ctx,
            skill_id,
            content: None,
            loading: true,
            regenerating: false,
            error: None,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.cheatsheet(skill_id).await;
            ctx.send(ViewEvent::CheatsheetLoaded(result.map_err(|e| e.to_string())));
        });
        view
    }

    pub fn regenerate(&mut self) {
        if self.regenerating {
            return;
        }
        self.regenerating = true;
        self.error = None;
        let skill_id = self.skill_id;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.regenerate_cheatsheet(skill_id).await;
            ctx.send(ViewEvent::CheatsheetLoaded(result.map_err(|e| e.to_string())));
        });
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        if let ViewEvent::CheatsheetLoaded(result) = event {
            self.loading = false;
            self.regenerating = false;
            match result {
                Ok(content) => self.content = Some(content),
                Err(e) => self.error = Some(e),
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::test_ctx;

    #[tokio::test]
    async fn regenerate_is_gated_while_in_flight() {
        let (ctx, _rx) = test_ctx();
        let mut view = CheatsheetView::mount(4, ctx);
        view.regenerate();
        assert!(view.regenerating);
        view.regenerate();
        assert!(view.regenerating);
        view.apply(ViewEvent::CheatsheetLoaded(Ok("# Sheet".into())));
        assert!(!view.regenerating);
        assert_eq!(view.content.as_deref(), Some("# Sheet"));
    }

    #[tokio::test]
    async fn failed_regenerate_keeps_previous_content() {
        let (ctx, _rx) = test_ctx();
        let mut view = CheatsheetView::mount(4, ctx);
        view.apply(ViewEvent::CheatsheetLoaded(Ok("# Sheet".into())));
        view.regenerate();
        view.apply(ViewEvent::CheatsheetLoaded(Err("down".into())));
        assert_eq!(view.content.as_deref(), Some("# Sheet"));
        assert!(view.error.is_some());
    }
}
