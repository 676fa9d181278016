//! Cheat sheet: one scrollable markdown document.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::markdown::render_markdown;
use crate::views::CheatsheetView;

use super::helpers::{apply_scroll, spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &CheatsheetView, tick_count: u64, scroll: u16, theme: &Theme, area: Rect) {
    let block = titled_block("cheat sheet", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.loading || view.regenerating {
        let verb = if view.regenerating {
            "regenerating"
        } else {
            "loading"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} {}…", spinner_frame(tick_count), verb),
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
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

    let mut lines = match &view.content {
        Some(content) => render_markdown(content),
        None => Vec::new(),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press r to regenerate",
        Style::default().fg(theme.dim),
    )));
    let body = Paragraph::new(apply_scroll(lines, scroll)).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}
