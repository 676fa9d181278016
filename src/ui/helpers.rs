//! Shared rendering helpers.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use super::theme::Theme;

/// Spinner frames for in-flight indicators, advanced by the tick count.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick_count: u64) -> &'static str {
    // Ticks are 16 ms; divide so the spinner turns at a readable rate.
    SPINNER_FRAMES[(tick_count / 6) as usize % SPINNER_FRAMES.len()]
}

/// Standard bordered block with a titled top edge.
pub fn titled_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.accent),
        ))
}

/// Centered overlay rect of the given size, clamped to the frame.
pub fn centered_rect(width: u16, height: u16, frame: Rect) -> Rect {
    let w = width.min(frame.width);
    let h = height.min(frame.height);
    Rect {
        x: frame.x + (frame.width - w) / 2,
        y: frame.y + (frame.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Bottom-anchored footer line listing key bindings.
pub fn key_hints<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(theme.dim),
        ));
    }
    Line::from(spans)
}

/// Skip `scroll` lines off the top for manual scrolling regions.
pub fn apply_scroll(lines: Vec<Line<'_>>, scroll: u16) -> Vec<Line<'_>> {
    lines.into_iter().skip(scroll as usize).collect()
}
