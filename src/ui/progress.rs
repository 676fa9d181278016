//! Progress screen: stats, a daily-XP sparkline-style bar chart, and the
//! achievement grid.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Paragraph, Wrap};
use ratatui::Frame;

use crate::views::ProgressView;

use super::helpers::{spinner_frame, titled_block};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &ProgressView, tick_count: u64, theme: &Theme, area: Rect) {
    if view.loading {
        let block = titled_block("progress", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
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
        let block = titled_block("progress", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(theme.error),
            ))),
            inner,
        );
        return;
    }

    let [stats_area, chart_area, achievements_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Min(0),
    ])
    .areas(area);

    render_stats(frame, view, theme, stats_area);
    render_chart(frame, view, theme, chart_area);
    render_achievements(frame, view, theme, achievements_area);
}

fn render_stats(frame: &mut Frame, view: &ProgressView, theme: &Theme, area: Rect) {
    let block = titled_block("stats", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let stats = match &view.stats {
        Some(s) => s,
        None => return,
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Level {} · {} XP total", stats.level, stats.total_xp),
            Style::default().fg(theme.fg).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Streak: {} days (best {})",
                stats.current_streak, stats.longest_streak
            ),
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            format!(
                "{} lessons · {} quizzes · {} reviews",
                stats.lessons_completed, stats.quizzes_completed, stats.reviews_completed
            ),
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            "Press e to export your progress as CSV",
            Style::default().fg(theme.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_chart(frame: &mut Frame, view: &ProgressView, theme: &Theme, area: Rect) {
    let block = titled_block("daily xp", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let charts = match &view.charts {
        Some(c) => c,
        None => return,
    };
    // Short day labels; the data is already server-ordered.
    let data: Vec<(&str, u64)> = charts
        .daily_xp
        .iter()
        .map(|day| {
            let label = day.date.get(5..).unwrap_or(day.date.as_str());
            (label, day.xp.max(0) as u64)
        })
        .collect();
    let chart = BarChart::default()
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.gauge))
        .value_style(Style::default().fg(theme.fg))
        .label_style(Style::default().fg(theme.dim));
    frame.render_widget(chart, inner);
}

fn render_achievements(frame: &mut Frame, view: &ProgressView, theme: &Theme, area: Rect) {
    let block = titled_block("achievements", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let mut lines = Vec::with_capacity(view.achievements.len());
    for achievement in &view.achievements {
        let (marker, style) = if achievement.unlocked {
            ("🏆", Style::default().fg(theme.fg))
        } else {
            ("🔒", Style::default().fg(theme.dim))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(achievement.name.clone(), style.bold()),
            Span::styled(
                format!("  {}", achievement.description),
                Style::default().fg(theme.dim),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
