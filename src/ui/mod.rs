//! UI rendering: navbar, the active view, a key-hint footer, and the
//! notification overlays.

mod chat;
mod cheatsheet;
mod dashboard;
mod helpers;
mod lesson;
mod navbar;
mod progress;
mod project;
mod quiz;
mod review;
mod skill_detail;
mod skill_picker;
mod theme;
mod toast;

pub use theme::Theme;

use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::views::View;

use helpers::key_hints;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::for_mode(app.dark_mode);
    let [navbar_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    navbar::render(frame, app, &theme, navbar_area);

    let ticks = app.tick_count;
    match &app.view {
        View::Dashboard { selected } => {
            dashboard::render(frame, app, *selected, &theme, body_area)
        }
        View::SkillPicker(view) => skill_picker::render(frame, view, ticks, &theme, body_area),
        View::SkillDetail(view) => skill_detail::render(frame, view, ticks, &theme, body_area),
        View::Lesson(view) => lesson::render(frame, view, ticks, app.scroll, &theme, body_area),
        View::Quiz(view) => quiz::render(frame, view, ticks, &theme, body_area),
        View::Chat(view) => chat::render(frame, view, ticks, app.scroll, &theme, body_area),
        View::Review(view) => review::render(frame, view, ticks, &theme, body_area),
        View::Progress(view) => progress::render(frame, view, ticks, &theme, body_area),
        View::Cheatsheet(view) => {
            cheatsheet::render(frame, view, ticks, app.scroll, &theme, body_area)
        }
        View::Project(view) => project::render(frame, view, ticks, app.scroll, &theme, body_area),
    }

    let hints = footer_hints(app);
    frame.render_widget(Paragraph::new(key_hints(&hints, &theme)), footer_area);

    toast::render(frame, app, &theme);
}

fn footer_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&'static str, &'static str)> = match &app.view {
        View::Dashboard { .. } => vec![
            ("↑↓", "select"),
            ("⏎", "open"),
            ("n", "new skill"),
            ("c", "chat"),
            ("r", "review"),
            ("p", "progress"),
        ],
        View::SkillPicker(_) => vec![("⏎", "preview")],
        View::SkillDetail(_) => vec![
            ("↑↓", "select"),
            ("⏎", "open"),
            ("c", "cheat sheet"),
            ("p", "project"),
            ("m", "mentor"),
            ("x", "delete"),
        ],
        View::Lesson(_) => vec![
            ("e/tab", "edit exercise"),
            ("a", "ask"),
            ("1-5", "rate"),
            ("Q", "quiz"),
        ],
        View::Quiz(_) => vec![("↑↓", "choose"), ("⏎", "answer")],
        View::Chat(_) => vec![("⏎", "send"), ("↑↓", "scroll")],
        View::Review(_) => vec![("space", "reveal"), ("1-4", "rate")],
        View::Progress(_) => vec![("e", "export")],
        View::Cheatsheet(_) => vec![("r", "regenerate"), ("↑↓", "scroll")],
        View::Project(_) => vec![("i", "edit"), ("^s", "submit")],
    };
    hints.push(("esc", "back"));
    hints.push(("t", "theme"));
    hints.push(("q", "quit"));
    hints
}
