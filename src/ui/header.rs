use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The widget's title bar: name on the left, minimize/close affordances on
/// the right.
pub fn draw_header(f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("💬 ", Style::default().fg(Color::LightMagenta)),
        Span::styled(
            "Concierge",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left);

    f.render_widget(title, chunks[0]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
        Span::styled("─", Style::default().fg(Color::Yellow)),
        Span::styled("  Ctrl+W ", Style::default().fg(Color::DarkGray)),
        Span::styled("✕", Style::default().fg(Color::Red)),
    ]))
    .alignment(Alignment::Right);

    f.render_widget(controls, chunks[1]);
}
