use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use medease_core::{QaMode, SummaryKind};
use crate::app::{App, InputMode, LineInput, Tab};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Paste(text) => handle_paste(app, &text),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Overlays take keys in order of priority
    if app.show_preferences {
        handle_preferences(app, key);
    } else if app.show_term_detail {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.show_term_detail = false;
        }
    } else if app.chat_open {
        match app.input_mode {
            InputMode::Editing => handle_chat_editing(app, key),
            InputMode::Normal => handle_chat_normal(app, key),
        }
    } else {
        match app.input_mode {
            InputMode::Normal => handle_normal_mode(app, key),
            InputMode::Editing => handle_editing_mode(app, key),
        }
    }
}

/// Apply a line-editing key to an input. Returns false for keys it ignores.
fn edit_line(input: &mut LineInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert(c);
        }
        _ => return false,
    }
    true
}

/// Keys shared by every tab when no overlay is open. Returns true if handled.
fn handle_global_normal(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('1') => app.set_tab(Tab::Upload),
        KeyCode::Char('2') => app.set_tab(Tab::Simplify),
        KeyCode::Char('3') => app.set_tab(Tab::Glossary),
        KeyCode::Char('4') => app.set_tab(Tab::Summaries),
        KeyCode::Tab => app.set_tab(app.tab.next()),
        KeyCode::BackTab => app.set_tab(app.tab.prev()),
        KeyCode::Char('c') => app.toggle_chat(),
        KeyCode::Char('p') => app.open_preferences(),
        KeyCode::Char('L') => app.cycle_language(),
        _ => return false,
    }
    true
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if handle_global_normal(app, key) {
        return;
    }

    match app.tab {
        Tab::Upload => handle_upload_normal(app, key),
        Tab::Simplify => handle_simplify_normal(app, key),
        Tab::Glossary => handle_glossary_normal(app, key),
        Tab::Summaries => handle_summaries_normal(app, key),
    }
}

fn handle_upload_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') | KeyCode::Enter => {
            if app.uploaded_file.is_none() {
                app.input_mode = InputMode::Editing;
            }
        }
        // Upload another file
        KeyCode::Char('r') => app.clear_upload(),
        _ => {}
    }
}

fn handle_simplify_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            app.select_next_term();
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            app.select_prev_term();
        }
        KeyCode::Enter => app.open_term_detail(),
        KeyCode::Esc => app.selected_term = None,
        // "What changed?"
        KeyCode::Char('w') => app.show_audit = !app.show_audit,
        KeyCode::PageDown => app.simplify_scroll = app.simplify_scroll.saturating_add(5),
        KeyCode::PageUp => app.simplify_scroll = app.simplify_scroll.saturating_sub(5),
        _ => {}
    }
}

fn handle_glossary_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('i') => app.input_mode = InputMode::Editing,
        KeyCode::Char('j') | KeyCode::Down => {
            app.glossary_scroll = app.glossary_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.glossary_scroll = app.glossary_scroll.saturating_sub(1);
        }
        KeyCode::Esc => {
            app.glossary_input.clear();
            app.glossary_scroll = 0;
        }
        _ => {}
    }
}

fn handle_summaries_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.summary_kind = app.summary_kind.prev(),
        KeyCode::Char('l') | KeyCode::Right => app.summary_kind = app.summary_kind.next(),
        KeyCode::Char('o') => app.summary_kind = SummaryKind::OneLine,
        KeyCode::Char('b') => app.summary_kind = SummaryKind::Bullets,
        KeyCode::Char('d') => app.summary_kind = SummaryKind::Detailed,
        KeyCode::Char('a') => app.show_summary_audit = !app.show_summary_audit,
        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match app.tab {
        Tab::Upload => match key.code {
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                let raw = app.upload_input.text.clone();
                app.upload_from_input(&raw);
            }
            _ => {
                edit_line(&mut app.upload_input, key);
            }
        },
        Tab::Glossary => match key.code {
            KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
            _ => {
                // Filter live as the query changes
                if edit_line(&mut app.glossary_input, key) {
                    app.glossary_scroll = 0;
                }
            }
        },
        Tab::Simplify | Tab::Summaries => app.input_mode = InputMode::Normal,
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') => app.toggle_chat(),
        KeyCode::Char('i') | KeyCode::Enter => app.input_mode = InputMode::Editing,
        KeyCode::Char('m') => app.cycle_chat_mode(),
        KeyCode::Char('s') => app.export_transcript(),
        KeyCode::Char('g') => app.set_chat_mode(QaMode::Grounded),
        KeyCode::Char('r') => app.set_chat_mode(QaMode::Related),
        KeyCode::Char('y') => app.set_chat_mode(QaMode::Hybrid),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_chat_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_chat_up(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('1') => app.set_tab(Tab::Upload),
        KeyCode::Char('2') => app.set_tab(Tab::Simplify),
        KeyCode::Char('3') => app.set_tab(Tab::Glossary),
        KeyCode::Char('4') => app.set_tab(Tab::Summaries),
        KeyCode::Char('p') => app.open_preferences(),
        _ => {}
    }
}

fn handle_chat_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => app.send_chat(),
        KeyCode::Tab => app.cycle_chat_mode(),
        KeyCode::Up => app.scroll_chat_up(),
        KeyCode::Down => app.scroll_chat_down(),
        _ => {
            edit_line(&mut app.chat_input, key);
        }
    }
}

fn handle_preferences(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_preferences(),
        KeyCode::Enter | KeyCode::Char('s') => app.save_preferences(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up => {
            app.prefs_next_field();
        }
        KeyCode::Char('l') | KeyCode::Right => app.prefs_cycle_value(1),
        KeyCode::Char('h') | KeyCode::Left => app.prefs_cycle_value(-1),
        _ => {}
    }
}

/// A paste is typed into the focused input, or treated as a file drop on the Upload tab
fn handle_paste(app: &mut App, text: &str) {
    if app.show_preferences || app.show_term_detail {
        return;
    }

    if app.chat_open {
        if app.input_mode == InputMode::Editing {
            app.chat_input.insert_str(text);
        }
        return;
    }

    match app.tab {
        Tab::Upload => app.drop_file(text),
        Tab::Glossary if app.input_mode == InputMode::Editing => {
            app.glossary_input.insert_str(text);
            app.glossary_scroll = 0;
        }
        _ => {}
    }
}

fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let over_chat = app.chat_open
        && app.chat_area.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if over_chat {
                app.scroll_chat_down();
            } else {
                match app.tab {
                    Tab::Simplify => app.simplify_scroll = app.simplify_scroll.saturating_add(1),
                    Tab::Glossary => app.glossary_scroll = app.glossary_scroll.saturating_add(1),
                    _ => {}
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if over_chat {
                app.scroll_chat_up();
            } else {
                match app.tab {
                    Tab::Simplify => app.simplify_scroll = app.simplify_scroll.saturating_sub(1),
                    Tab::Glossary => app.glossary_scroll = app.glossary_scroll.saturating_sub(1),
                    _ => {}
                }
            }
        }
        _ => {}
    }
}
