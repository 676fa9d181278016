//! Keyboard handling.
//!
//! `handle_key` routes a key press either to a focused text field or to the
//! per-route bindings, with a small set of global keys on top. All state
//! changes go through the [`App`]; this module never talks to the network.

mod field;

pub use field::InputField;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::models::Quality;
use crate::router::Route;
use crate::views::View;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Ctrl+C quits from anywhere, even inside a text field.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    if typing_target(app, key) {
        app.mark_dirty();
        return;
    }
    if global_key(app, key) {
        return;
    }
    route_key(app, key);
}

/// Route the key into whichever text field currently has focus.
/// Returns true if the key was consumed.
fn typing_target(app: &mut App, key: KeyEvent) -> bool {
    match &mut app.view {
        View::SkillPicker(view) if view.preview.is_none() => match key.code {
            KeyCode::Enter => {
                view.request_preview();
                true
            }
            KeyCode::Esc => false,
            _ => view.name.handle_key(key),
        },
        View::Lesson(view) => {
            if let Some(index) = view.focused_exercise {
                match key.code {
                    KeyCode::Esc => {
                        view.focused_exercise = None;
                        true
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        view.run_exercise(index);
                        true
                    }
                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        view.submit_exercise(index);
                        true
                    }
                    _ => {
                        if let Some(state) = view.exercises.get_mut(index) {
                            if state.input.handle_key(key) {
                                state.mark_dirty();
                            }
                        }
                        true
                    }
                }
            } else if view.explain_focused {
                match key.code {
                    KeyCode::Esc => {
                        view.explain_focused = false;
                        true
                    }
                    KeyCode::Enter => {
                        view.ask_explanation();
                        true
                    }
                    _ => view.explain_input.handle_key(key),
                }
            } else {
                false
            }
        }
        View::Quiz(view) => {
            let short_answer = view
                .quiz
                .as_ref()
                .and_then(|q| q.questions.get(view.current))
                .map(|q| q.question_type == crate::models::QuestionType::ShortAnswer)
                .unwrap_or(false);
            if short_answer && !view.current_answered() && view.result.is_none() {
                match key.code {
                    KeyCode::Esc => false,
                    KeyCode::Enter => {
                        view.check_answer();
                        true
                    }
                    _ => view.answer_input.handle_key(key),
                }
            } else {
                false
            }
        }
        View::Chat(view) => match key.code {
            KeyCode::Esc => false,
            KeyCode::Enter => {
                view.send_message();
                true
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => false,
            _ => view.input.handle_key(key),
        },
        View::Project(view) if view.editing => match key.code {
            KeyCode::Esc => {
                view.editing = false;
                true
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                view.submit();
                true
            }
            _ => view.input.handle_key(key),
        },
        _ => false,
    }
}

/// Keys that work on every route when no text field is focused.
fn global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            true
        }
        KeyCode::Esc | KeyCode::Char('[') => {
            app.go_back();
            true
        }
        KeyCode::Char(']') => {
            app.go_forward();
            true
        }
        KeyCode::Char('h') if app.route != Route::Dashboard => {
            app.navigate(Route::Dashboard);
            true
        }
        KeyCode::Char('t') => {
            app.toggle_dark_mode();
            true
        }
        KeyCode::Down | KeyCode::Char('j') if scrollable(app) => {
            app.scroll_down(1);
            true
        }
        KeyCode::Up | KeyCode::Char('k') if scrollable(app) => {
            app.scroll_up(1);
            true
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            true
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            true
        }
        _ => false,
    }
}

/// Routes where j/k and arrows scroll instead of moving a selection.
fn scrollable(app: &App) -> bool {
    matches!(
        app.view,
        View::Lesson(_) | View::Cheatsheet(_) | View::Chat(_) | View::Progress(_) | View::Project(_)
    )
}

fn route_key(app: &mut App, key: KeyEvent) {
    match &mut app.view {
        View::Dashboard { selected } => {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected + 1 < app.skills.len() {
                        *selected += 1;
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
                KeyCode::Enter => {
                    if let Some(skill) = app.skills.get(*selected) {
                        let id = skill.id;
                        app.navigate(Route::Skill(id));
                        return;
                    }
                }
                KeyCode::Char('n') => {
                    app.navigate(Route::NewSkill);
                    return;
                }
                KeyCode::Char('c') => {
                    app.navigate(Route::Chat(None));
                    return;
                }
                KeyCode::Char('r') => {
                    app.navigate(Route::Review);
                    return;
                }
                KeyCode::Char('p') => {
                    app.navigate(Route::Progress);
                    return;
                }
                _ => return,
            }
            app.mark_dirty();
        }
        View::SkillPicker(view) => {
            // Preview shown; name entry is handled by typing_target.
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => view.confirm_create(),
                KeyCode::Char('n') => view.discard_preview(),
                _ => return,
            }
            app.mark_dirty();
        }
        View::SkillDetail(view) => {
            let skill_id = view.skill_id;
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => view.select_next(),
                KeyCode::Up | KeyCode::Char('k') => view.select_prev(),
                KeyCode::Enter => {
                    let effects = view.open_selected();
                    app.run_effects(effects);
                }
                KeyCode::Char('c') => {
                    app.navigate(Route::Cheatsheet(skill_id));
                    return;
                }
                KeyCode::Char('p') => {
                    app.navigate(Route::Project(skill_id));
                    return;
                }
                KeyCode::Char('m') => {
                    app.navigate(Route::Chat(Some(skill_id)));
                    return;
                }
                KeyCode::Char('x') => view.request_delete(),
                _ => return,
            }
            app.mark_dirty();
        }
        View::Lesson(view) => {
            match key.code {
                KeyCode::Char('e') => {
                    if !view.exercises.is_empty() {
                        view.focused_exercise = Some(0);
                    }
                }
                KeyCode::Tab => {
                    // Cycle editor focus across exercises.
                    if !view.exercises.is_empty() {
                        let next = view
                            .focused_exercise
                            .map_or(0, |i| (i + 1) % view.exercises.len());
                        view.focused_exercise = Some(next);
                    }
                }
                KeyCode::Char('a') => view.explain_focused = true,
                KeyCode::Char(c @ '1'..='5') => {
                    view.rate_lesson(c as i64 - '0' as i64);
                }
                KeyCode::Char('Q') => view.start_quiz(),
                _ => return,
            }
            app.mark_dirty();
        }
        View::Quiz(view) => {
            if view.result.is_some() {
                if key.code == KeyCode::Enter {
                    app.navigate(Route::Dashboard);
                }
                return;
            }
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => view.select_next_option(),
                KeyCode::Up | KeyCode::Char('k') => view.select_prev_option(),
                KeyCode::Enter => {
                    if !view.current_answered() {
                        view.check_answer();
                    } else if view.is_last_question() {
                        view.finish();
                    } else {
                        view.next_question();
                    }
                }
                _ => return,
            }
            app.mark_dirty();
        }
        View::Review(view) => {
            if view.completed {
                if key.code == KeyCode::Enter {
                    app.navigate(Route::Dashboard);
                }
                return;
            }
            match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => view.reveal(),
                KeyCode::Char('1') => view.rate(Quality::Again),
                KeyCode::Char('2') => view.rate(Quality::Hard),
                KeyCode::Char('3') => view.rate(Quality::Good),
                KeyCode::Char('4') => view.rate(Quality::Easy),
                _ => return,
            }
            app.mark_dirty();
        }
        View::Progress(view) => {
            if key.code == KeyCode::Char('e') {
                let effects = view.open_export();
                app.run_effects(effects);
            }
        }
        View::Cheatsheet(view) => {
            if key.code == KeyCode::Char('r') {
                view.regenerate();
                app.mark_dirty();
            }
        }
        View::Project(view) => {
            if key.code == KeyCode::Char('i') || key.code == KeyCode::Char('e') {
                view.editing = true;
                app.mark_dirty();
            }
        }
        View::Chat(_) => {}
    }
}
