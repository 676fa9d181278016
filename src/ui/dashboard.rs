//! Dashboard: skill list plus shortcuts to the other screens.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;

use super::helpers::titled_block;
use super::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, selected: usize, theme: &Theme, area: Rect) {
    let block = titled_block("your skills", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.skills.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No skills yet. Press n to start learning something new.",
                Style::default().fg(theme.dim),
            )),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = app
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let marker = if i == selected { "▸ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(skill.name.clone(), Style::default().fg(theme.fg).bold()),
            ];
            if let Some(description) = &skill.description {
                spans.push(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(theme.dim),
                ));
            }
            let style = if i == selected {
                Style::default().bg(theme.selection_bg)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}
