//! Review session: one card at a time, reveal then rate.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::markdown::render_markdown;
use crate::models::Quality;
use crate::views::ReviewView;

use super::helpers::{spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &ReviewView, tick_count: u64, theme: &Theme, area: Rect) {
    let block = titled_block("review", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.loading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} loading queue…", spinner_frame(tick_count)),
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
    if view.completed {
        let lines = vec![
            Line::from(Span::styled(
                "All caught up!",
                Style::default().fg(theme.success).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} cards reviewed · +{} XP",
                    view.reviewed_count, view.xp_earned
                ),
                Style::default().fg(theme.fg),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return to the dashboard",
                Style::default().fg(theme.accent),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }
    let card = match view.current_card() {
        Some(c) => c,
        None => return,
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("Card {} of {}", view.current + 1, view.cards.len()),
        Style::default().fg(theme.dim),
    ))];
    if let Some(topic) = &card.lesson_topic {
        lines.push(Line::from(Span::styled(
            format!("from: {}", topic),
            Style::default().fg(theme.dim),
        )));
    }
    lines.push(Line::from(""));
    lines.extend(render_markdown(&card.question));
    lines.push(Line::from(""));

    if view.revealed {
        lines.push(Line::from(Span::styled(
            "Answer",
            Style::default().fg(theme.accent).bold(),
        )));
        lines.extend(render_markdown(&card.answer));
        lines.push(Line::from(""));
        if view.rating {
            lines.push(Line::from(Span::styled(
                format!("{} recording…", spinner_frame(tick_count)),
                Style::default().fg(theme.dim),
            )));
        } else {
            let ratings = [Quality::Again, Quality::Hard, Quality::Good, Quality::Easy];
            let spans: Vec<Span> = ratings
                .iter()
                .enumerate()
                .flat_map(|(i, quality)| {
                    vec![
                        Span::styled(
                            format!("{} ", i + 1),
                            Style::default().fg(theme.accent).bold(),
                        ),
                        Span::styled(
                            format!("{}   ", quality.label()),
                            Style::default().fg(theme.fg),
                        ),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Press Space to reveal the answer",
            Style::default().fg(theme.accent),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
