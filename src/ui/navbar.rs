//! Top bar: current screen title, level and XP gauge, review-count badge.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::leveling::xp_progress_percent;

use super::helpers::titled_block;
use super::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = titled_block("mentor", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, gauge_area, badge_area] = Layout::horizontal([
        Constraint::Min(12),
        Constraint::Length(34),
        Constraint::Length(14),
    ])
    .areas(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        app.route.title(),
        Style::default().fg(theme.fg).bold(),
    )));
    frame.render_widget(title, title_area);

    match &app.progress {
        Some(progress) => {
            let percent = xp_progress_percent(progress);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(theme.gauge).bg(theme.gauge_bg))
                .ratio(percent / 100.0)
                .label(format!(
                    "Lv {} · {} XP",
                    progress.level, progress.total_xp
                ));
            frame.render_widget(gauge, gauge_area);
        }
        None => {
            let placeholder =
                Paragraph::new(Line::from(Span::styled("…", Style::default().fg(theme.dim))));
            frame.render_widget(placeholder, gauge_area);
        }
    }

    let badge_style = if app.review_count > 0 {
        Style::default().fg(theme.warning).bold()
    } else {
        Style::default().fg(theme.dim)
    };
    let badge = Paragraph::new(Line::from(Span::styled(
        format!(" due: {}", app.review_count),
        badge_style,
    )));
    frame.render_widget(badge, badge_area);
}
