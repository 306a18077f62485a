pub mod chat;
pub mod footer;
pub mod header;
pub mod launcher;
pub mod quit_confirm;

use crate::app::{App, WidgetState};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    match app.state {
        WidgetState::Launcher => launcher::draw_launcher(f, chunks[0], app),
        WidgetState::Chat => chat::draw_chat(f, chunks[0], app),
        WidgetState::QuitConfirm => quit_confirm::draw_quit_confirm(f, chunks[0]),
        WidgetState::Quit => {}
    }

    footer::draw_footer(f, chunks[1], app);
}
