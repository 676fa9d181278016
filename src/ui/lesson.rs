//! Lesson screen: rendered content, exercise editors, explain prompt, and
//! the rate/quiz footer. The whole body scrolls as one column of lines.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::markdown::render_markdown;
use crate::views::{ExerciseState, LessonView};

use super::helpers::{apply_scroll, spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &LessonView, tick_count: u64, scroll: u16, theme: &Theme, area: Rect) {
    let title = view.lesson.as_ref().map_or("lesson", |l| l.topic.as_str());
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

    let mut lines: Vec<Line> = Vec::new();
    if let Some(content) = &view.content {
        if let Some(objective) = &content.objective {
            lines.push(Line::from(Span::styled(
                format!("Objective: {}", objective),
                Style::default().fg(theme.accent).italic(),
            )));
            lines.push(Line::from(""));
        }
        for section in &content.sections {
            lines.push(Line::from(Span::styled(
                section.heading.clone(),
                Style::default().fg(theme.accent).bold(),
            )));
            lines.extend(render_markdown(&section.content));
            lines.push(Line::from(""));
        }
        if let Some(summary) = &content.summary {
            lines.push(Line::from(Span::styled(
                "Summary",
                Style::default().fg(theme.accent).bold(),
            )));
            lines.extend(render_markdown(summary));
            lines.push(Line::from(""));
        }
    }

    for (i, exercise) in view.exercises.iter().enumerate() {
        let focused = view.focused_exercise == Some(i);
        push_exercise(&mut lines, i, exercise, focused, tick_count, theme);
    }

    push_explain(&mut lines, view, tick_count, theme);
    push_footer(&mut lines, view, tick_count, theme);

    let body = Paragraph::new(apply_scroll(lines, scroll)).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

fn push_exercise(
    lines: &mut Vec<Line<'_>>,
    index: usize,
    state: &ExerciseState,
    focused: bool,
    tick_count: u64,
    theme: &Theme,
) {
    let marker = if state.correct {
        Span::styled("✓", Style::default().fg(theme.success))
    } else if focused {
        Span::styled("▸", Style::default().fg(theme.accent))
    } else {
        Span::styled("○", Style::default().fg(theme.dim))
    };
    lines.push(Line::from(vec![
        marker,
        Span::styled(
            format!(" Exercise {}", index + 1),
            Style::default().fg(theme.fg).bold(),
        ),
        Span::styled(
            if focused { "  (editing)" } else { "" },
            Style::default().fg(theme.dim),
        ),
    ]));
    lines.extend(render_markdown(&state.exercise.prompt));
    for text_line in state.input.text().lines() {
        lines.push(Line::from(vec![
            Span::styled("  │ ", Style::default().fg(theme.border)),
            Span::styled(text_line.to_string(), Style::default().fg(theme.fg)),
        ]));
    }
    if state.running || state.submitting {
        let verb = if state.running { "running" } else { "evaluating" };
        lines.push(Line::from(Span::styled(
            format!("  {} {}…", spinner_frame(tick_count), verb),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(output) = &state.output {
        lines.push(Line::from(Span::styled(
            "  output:",
            Style::default().fg(theme.dim),
        )));
        for out_line in output.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {}", out_line),
                Style::default().fg(theme.fg),
            )));
        }
    }
    if let Some(run_error) = &state.run_error {
        lines.push(Line::from(Span::styled(
            format!("  {}", run_error),
            Style::default().fg(theme.error),
        )));
    }
    if let Some(feedback) = &state.feedback {
        let color = if state.correct {
            theme.success
        } else {
            theme.warning
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", feedback),
            Style::default().fg(color),
        )));
        for hint in &state.hints {
            lines.push(Line::from(Span::styled(
                format!("  hint: {}", hint),
                Style::default().fg(theme.dim),
            )));
        }
    }
    lines.push(Line::from(""));
}

fn push_explain(lines: &mut Vec<Line<'_>>, view: &LessonView, tick_count: u64, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        if view.explain_focused {
            "Ask about this lesson (Enter to send, Esc to cancel):"
        } else {
            "Press a to ask a question about this lesson"
        },
        Style::default().fg(theme.dim),
    )));
    if view.explain_focused || !view.explain_input.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("? ", Style::default().fg(theme.accent)),
            Span::styled(view.explain_input.text(), Style::default().fg(theme.fg)),
        ]));
    }
    if view.explaining {
        lines.push(Line::from(Span::styled(
            format!("{} thinking…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
    }
    if let Some(error) = &view.explain_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }
    if let Some(explanation) = &view.explanation {
        lines.extend(render_markdown(explanation));
    }
    lines.push(Line::from(""));
}

fn push_footer(lines: &mut Vec<Line<'_>>, view: &LessonView, tick_count: u64, theme: &Theme) {
    let rating = view
        .feedback_rating
        .map_or_else(|| "not rated".to_string(), |r| format!("rated {}/5", r));
    lines.push(Line::from(Span::styled(
        format!("Rate this lesson with 1-5 ({})", rating),
        Style::default().fg(theme.dim),
    )));
    if view.starting_quiz {
        lines.push(Line::from(Span::styled(
            format!("{} preparing quiz…", spinner_frame(tick_count)),
            Style::default().fg(theme.dim),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Press Q to finish the lesson and take the quiz",
            Style::default().fg(theme.accent),
        )));
    }
    if let Some(error) = &view.quiz_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }
}
