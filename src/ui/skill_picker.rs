//! New-skill screen: name prompt, then the generated curriculum preview.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::views::SkillPickerView;

use super::helpers::{spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(
    frame: &mut Frame,
    view: &SkillPickerView,
    tick_count: u64,
    theme: &Theme,
    area: Rect,
) {
    match &view.preview {
        None => render_prompt(frame, view, tick_count, theme, area),
        Some(_) => render_preview(frame, view, tick_count, theme, area),
    }
}

fn render_prompt(
    frame: &mut Frame,
    view: &SkillPickerView,
    tick_count: u64,
    theme: &Theme,
    area: Rect,
) {
    let block = titled_block("learn something new", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "What do you want to learn?",
            Style::default().fg(theme.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(view.name.text(), Style::default().fg(theme.fg)),
        ]),
        Line::from(""),
    ];
    if !view.previewing {
        // Put the terminal cursor where the next character will land.
        let x = (inner.x + 2 + view.name.cursor_width()).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y + 2));
    }
    if view.previewing {
        lines.push(Line::from(Span::styled(
            format!("{} generating curriculum…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(error) = &view.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_preview(
    frame: &mut Frame,
    view: &SkillPickerView,
    tick_count: u64,
    theme: &Theme,
    area: Rect,
) {
    let preview = match &view.preview {
        Some(p) => p,
        None => return,
    };
    let [body_area, action_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

    let block = titled_block(&preview.name, theme);
    let inner = block.inner(body_area);
    frame.render_widget(block, body_area);

    let mut lines = vec![
        Line::from(Span::styled(
            preview.description.clone(),
            Style::default().fg(theme.fg),
        )),
        Line::from(""),
    ];
    for (i, topic) in preview.topics.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(theme.dim)),
            Span::styled(topic.title.clone(), Style::default().fg(theme.fg).bold()),
        ]));
        if let Some(description) = &topic.description {
            lines.push(Line::from(Span::styled(
                format!("     {}", description),
                Style::default().fg(theme.dim),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    let action = if view.creating {
        Line::from(Span::styled(
            format!("{} creating skill…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        ))
    } else if let Some(error) = &view.error {
        Line::from(Span::styled(error.clone(), Style::default().fg(theme.error)))
    } else {
        Line::from(Span::styled(
            "Start learning this? (y)es / (n)o",
            Style::default().fg(theme.accent),
        ))
    };
    frame.render_widget(Paragraph::new(action), action_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::test_ctx;
    use crate::views::SkillPickerView;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[tokio::test]
    async fn prompt_places_cursor_after_typed_text() {
        let (ctx, _rx) = test_ctx();
        let mut view = SkillPickerView::new(ctx);
        view.name.set_text("rust");
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, &view, 0, &theme, frame.area()))
            .unwrap();
        let position = terminal.get_cursor_position().unwrap();
        // Border, "> " prompt, then the four typed cells.
        assert_eq!(position.x, 1 + 2 + 4);
    }
}
