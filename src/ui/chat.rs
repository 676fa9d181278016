//! Mentor chat transcript with a single-line composer at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::markdown::render_markdown;
use crate::models::ChatRole;
use crate::views::ChatView;

use super::helpers::{apply_scroll, spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &ChatView, tick_count: u64, scroll: u16, theme: &Theme, area: Rect) {
    let title = view
        .skill_name
        .as_ref()
        .map_or_else(|| "mentor chat".to_string(), |name| format!("chat · {}", name));
    let block = titled_block(&title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [transcript_area, composer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

    let mut lines: Vec<Line> = Vec::new();
    if view.loading {
        lines.push(Line::from(Span::styled(
            format!("{} loading history…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
    }
    for message in &view.messages {
        let (label, color) = match message.role {
            ChatRole::User => ("you", theme.accent),
            ChatRole::Assistant => ("mentor", theme.success),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).bold(),
        )));
        lines.extend(render_markdown(&message.content));
        lines.push(Line::from(""));
    }
    if view.thinking {
        lines.push(Line::from(Span::styled(
            format!("{} mentor is thinking…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(error) = &view.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }
    let transcript = Paragraph::new(apply_scroll(lines, scroll)).wrap(Wrap { trim: false });
    frame.render_widget(transcript, transcript_area);

    let composer = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.accent)),
        Span::styled(view.input.text(), Style::default().fg(theme.fg)),
    ]));
    frame.render_widget(composer, composer_area);
    let x = (composer_area.x + 2 + view.input.cursor_width())
        .min(composer_area.right().saturating_sub(1));
    frame.set_cursor_position((x, composer_area.y));
}
