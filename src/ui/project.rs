//! Capstone project screen: brief, submission editor, evaluation result,
//! and past attempts.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::markdown::render_markdown;
use crate::views::ProjectView;

use super::helpers::{apply_scroll, spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &ProjectView, tick_count: u64, scroll: u16, theme: &Theme, area: Rect) {
    let title = view.brief.as_ref().map_or("project", |b| b.title.as_str());
    let block = titled_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.loading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} loading…", spinner_frame(tick_count)),
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
            )))
            .wrap(Wrap { trim: true }),
            inner,
        );
        return;
    }
    let brief = match &view.brief {
        Some(b) => b,
        None => return,
    };

    let mut lines: Vec<Line> = render_markdown(&brief.description);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Requirements",
        Style::default().fg(theme.accent).bold(),
    )));
    for requirement in &brief.requirements {
        lines.push(Line::from(Span::styled(
            format!("• {}", requirement),
            Style::default().fg(theme.fg),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        if view.editing {
            "Your submission (Ctrl+S to submit, Esc to stop editing):"
        } else {
            "Press i to edit your submission"
        },
        Style::default().fg(theme.dim),
    )));
    for text_line in view.input.text().lines() {
        lines.push(Line::from(vec![
            Span::styled("  │ ", Style::default().fg(theme.border)),
            Span::styled(text_line.to_string(), Style::default().fg(theme.fg)),
        ]));
    }
    if view.submitting {
        lines.push(Line::from(Span::styled(
            format!("{} evaluating…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(error) = &view.submit_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }

    if let Some(evaluation) = &view.evaluation {
        lines.push(Line::from(""));
        let (verdict, color) = if evaluation.passed {
            ("Passed", theme.success)
        } else {
            ("Not yet", theme.warning)
        };
        lines.push(Line::from(Span::styled(
            format!("{} · score {:.0}%", verdict, evaluation.score * 100.0),
            Style::default().fg(color).bold(),
        )));
        lines.extend(render_markdown(&evaluation.feedback));
        for strength in &evaluation.strengths {
            lines.push(Line::from(Span::styled(
                format!("+ {}", strength),
                Style::default().fg(theme.success),
            )));
        }
        for suggestion in evaluation
            .suggestions
            .iter()
            .chain(&evaluation.areas_for_improvement)
        {
            lines.push(Line::from(Span::styled(
                format!("- {}", suggestion),
                Style::default().fg(theme.warning),
            )));
        }
    }

    if !view.submissions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Past attempts",
            Style::default().fg(theme.accent).bold(),
        )));
        for submission in &view.submissions {
            let marker = if submission.passed { "✓" } else { "✗" };
            lines.push(Line::from(Span::styled(
                format!(
                    "{} {} (+{} XP)",
                    marker,
                    submission
                        .created_at
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_else(|| "earlier".to_string()),
                    submission.xp_earned
                ),
                Style::default().fg(theme.dim),
            )));
        }
    }

    let body = Paragraph::new(apply_scroll(lines, scroll)).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

/// Server timestamps are RFC 3339; show raw text if one isn't.
fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
