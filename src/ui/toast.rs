//! Toast and achievement overlays, drawn last so they sit on top.

use ratatui::layout::Rect;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::notifications::ToastKind;

use super::helpers::titled_block;
use super::theme::Theme;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let frame_area = frame.area();
    if let Some(toast) = app.notifications.toast() {
        let color = match toast.kind {
            ToastKind::Info => theme.accent,
            ToastKind::Success => theme.success,
            ToastKind::Error => theme.error,
        };
        let width = (toast.message.len() as u16 + 4).clamp(20, frame_area.width);
        let area = Rect {
            x: frame_area.width.saturating_sub(width + 1),
            y: frame_area.height.saturating_sub(4),
            width,
            height: 3,
        };
        frame.render_widget(Clear, area);
        let body = Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(color),
        )))
        .block(titled_block("notice", theme))
        .wrap(Wrap { trim: true });
        frame.render_widget(body, area);
    }

    if let Some(popup) = app.notifications.achievement() {
        let width = 40.min(frame_area.width);
        let area = Rect {
            x: frame_area.width.saturating_sub(width + 1),
            y: 3.min(frame_area.height.saturating_sub(4)),
            width,
            height: 4,
        };
        frame.render_widget(Clear, area);
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("🏆 {}", popup.name),
                Style::default().fg(theme.warning).bold(),
            )),
            Line::from(Span::styled(
                popup.description.clone(),
                Style::default().fg(theme.dim),
            )),
        ])
        .block(titled_block("achievement", theme))
        .wrap(Wrap { trim: true });
        frame.render_widget(body, area);
    }
}
