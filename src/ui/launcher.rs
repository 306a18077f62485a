use crate::app::App;
use crate::constants::TOOLTIP_TEXT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// The closed widget: a floating launcher bubble, the onboarding tooltip once
/// the rules load settles, and a small menu.
pub fn draw_launcher(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Length(2),
            Constraint::Length(app.launcher_items.len() as u16),
            Constraint::Min(1),
        ])
        .split(area);

    let bubble = r#"
   ╭───────────╮
   │  💬  ···  │
   ╰─────┬─────╯
         ╰─"#;

    let bubble_par = Paragraph::new(bubble)
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default());

    f.render_widget(bubble_par, chunks[1]);

    if app.tooltip_visible {
        let tooltip = Paragraph::new(Line::from(Span::styled(
            TOOLTIP_TEXT,
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(tooltip, chunks[2]);
    }

    let mut menu_lines = Vec::new();
    for (i, item) in app.launcher_items.iter().enumerate() {
        let selected = i == app.selected_launcher_item;
        let style = if selected {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        menu_lines.push(Line::from(Span::styled(
            format!("{} {}", if selected { "▶" } else { " " }, item),
            style,
        )));
    }
    let menu_par = Paragraph::new(menu_lines)
        .alignment(Alignment::Center)
        .block(Block::default());

    f.render_widget(menu_par, chunks[3]);
}
