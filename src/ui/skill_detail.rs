//! Skill detail: the lesson plan with completion markers.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::views::SkillDetailView;

use super::helpers::{centered_rect, spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(
    frame: &mut Frame,
    view: &SkillDetailView,
    tick_count: u64,
    theme: &Theme,
    area: Rect,
) {
    let title = view
        .detail
        .as_ref()
        .and_then(|d| d.skill.as_ref())
        .map_or("skill", |s| s.name.as_str());
    let block = titled_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.loading {
        let loading = Paragraph::new(Line::from(Span::styled(
            format!("{} loading…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
        frame.render_widget(loading, inner);
        return;
    }
    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            ))),
            inner,
        );
        return;
    }
    let detail = match &view.detail {
        Some(d) => d,
        None => return,
    };

    let items: Vec<ListItem> = detail
        .lessons
        .iter()
        .enumerate()
        .map(|(i, lesson)| {
            let marker = if lesson.is_completed() {
                Span::styled("✓ ", Style::default().fg(theme.success))
            } else if view.generating == Some(lesson.id) {
                Span::styled(
                    format!("{} ", spinner_frame(tick_count)),
                    Style::default().fg(theme.accent),
                )
            } else if lesson.has_content() {
                Span::styled("· ", Style::default().fg(theme.fg))
            } else {
                Span::styled("○ ", Style::default().fg(theme.dim))
            };
            let mut spans = vec![
                marker,
                Span::styled(lesson.topic.clone(), Style::default().fg(theme.fg)),
            ];
            if let Some(minutes) = lesson.estimated_minutes {
                spans.push(Span::styled(
                    format!("  ~{} min", minutes),
                    Style::default().fg(theme.dim),
                ));
            }
            let style = if i == view.selected {
                Style::default().bg(theme.selection_bg)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);

    if view.confirm_delete {
        let dialog = centered_rect(52, 5, area);
        frame.render_widget(Clear, dialog);
        let block = titled_block("delete skill?", theme);
        let body = block.inner(dialog);
        frame.render_widget(block, dialog);
        let warning = Paragraph::new(Line::from(Span::styled(
            "Press x again to delete this skill and all its lessons",
            Style::default().fg(theme.error).bold(),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(warning, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillDetail;
    use crate::views::tests::test_ctx;
    use crate::views::SkillDetailView;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn confirm_delete_draws_centered_dialog() {
        let (ctx, _rx) = test_ctx();
        let mut view = SkillDetailView::mount(1, ctx);
        view.loading = false;
        view.detail = Some(SkillDetail::default());
        view.confirm_delete = true;
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, &view, 0, &theme, frame.area()))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("delete skill?"));
        assert!(text.contains("Press x again"));
    }
}
