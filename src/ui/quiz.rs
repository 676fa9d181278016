//! Quiz screen: one question at a time, then the score summary.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::models::QuestionType;
use crate::views::QuizView;

use super::helpers::{spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &QuizView, tick_count: u64, theme: &Theme, area: Rect) {
    let block = titled_block("quiz", theme);
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
            ))),
            inner,
        );
        return;
    }
    if let Some(result) = &view.result {
        render_result(frame, view, result.xp_earned, theme, inner);
        return;
    }
    let quiz = match &view.quiz {
        Some(q) => q,
        None => return,
    };
    let question = match quiz.questions.get(view.current) {
        Some(q) => q,
        None => return,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", view.current + 1, quiz.questions.len()),
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.question.clone(),
            Style::default().fg(theme.fg).bold(),
        )),
        Line::from(""),
    ];

    let answered = view.answers.get(&view.current);
    match question.question_type {
        QuestionType::MultipleChoice => {
            for (i, option) in question.options.iter().enumerate() {
                let cursor = if i == view.selected_option && answered.is_none() {
                    "▸ "
                } else {
                    "  "
                };
                let style = match answered {
                    Some(answer) if *option == answer.answer && answer.correct => {
                        Style::default().fg(theme.success).bold()
                    }
                    Some(answer) if *option == answer.answer => {
                        Style::default().fg(theme.error).bold()
                    }
                    _ => Style::default().fg(theme.fg),
                };
                lines.push(Line::from(vec![
                    Span::styled(cursor, Style::default().fg(theme.accent)),
                    Span::styled(option.clone(), style),
                ]));
            }
        }
        QuestionType::ShortAnswer => {
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(theme.accent)),
                Span::styled(view.answer_input.text(), Style::default().fg(theme.fg)),
            ]));
            if view.grading {
                lines.push(Line::from(Span::styled(
                    format!("{} grading…", spinner_frame(tick_count)),
                    Style::default().fg(theme.dim),
                )));
            }
            if let Some(error) = &view.grade_error {
                lines.push(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(theme.error),
                )));
            }
        }
    }

    if let Some(answer) = answered {
        lines.push(Line::from(""));
        if let Some(feedback) = view.feedback.get(&view.current) {
            let color = if answer.correct {
                theme.success
            } else {
                theme.warning
            };
            lines.push(Line::from(Span::styled(
                feedback.clone(),
                Style::default().fg(color),
            )));
        }
        lines.push(Line::from(""));
        let prompt = if view.is_last_question() {
            "Press Enter to finish the quiz"
        } else {
            "Press Enter for the next question"
        };
        lines.push(Line::from(Span::styled(
            prompt,
            Style::default().fg(theme.accent),
        )));
    }
    if let Some(error) = &view.submit_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_result(frame: &mut Frame, view: &QuizView, xp_earned: i64, theme: &Theme, area: Rect) {
    let correct = view.answers.values().filter(|a| a.correct).count();
    let total = view.answers.len();
    let lines = vec![
        Line::from(Span::styled(
            "Quiz complete!",
            Style::default().fg(theme.success).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}/{}", correct, total),
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            format!("+{} XP", xp_earned),
            Style::default().fg(theme.warning),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to the dashboard",
            Style::default().fg(theme.accent),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
