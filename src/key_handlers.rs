use crate::app::{App, WidgetState};
use crate::conversation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn handle_launcher_input(app: &mut App, key: KeyEvent, app_arc: Arc<Mutex<App>>) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Down) => {
            app.selected_launcher_item = (app.selected_launcher_item + 1) % app.launcher_items.len();
        }
        (KeyModifiers::NONE, KeyCode::Up) => {
            if app.selected_launcher_item == 0 {
                app.selected_launcher_item = app.launcher_items.len() - 1;
            } else {
                app.selected_launcher_item -= 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Enter) => {
            match app.launcher_items[app.selected_launcher_item] {
                "quit" => app.state = WidgetState::QuitConfirm,
                "open chat" => open_widget(app, app_arc),
                _ => {}
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('o')) => open_widget(app, app_arc),
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            app.state = WidgetState::QuitConfirm;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.state = WidgetState::QuitConfirm;
        }
        _ => {}
    }
}

fn open_widget(app: &mut App, app_arc: Arc<Mutex<App>>) {
    // The greeting is due only on the very first open.
    if app.open() {
        tokio::spawn(conversation::greet(app_arc));
    }
}

pub fn handle_chat_input(app: &mut App, key: KeyEvent, app_arc: Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Esc => app.minimize(),
        KeyCode::Enter => {
            let text = app.chat_input.clone();
            if !text.trim().is_empty() {
                tokio::spawn(conversation::submit_message(app_arc, text));
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = WidgetState::QuitConfirm,
                    'w' => app.close(),
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.chat_input.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = WidgetState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = WidgetState::Launcher;
        }
        _ => {}
    }
}
