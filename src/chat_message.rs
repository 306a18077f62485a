use crate::rules::Link;
use crate::utils::format_clock;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// A single entry in the message feed.
///
/// User messages appear whole; bot messages hold their full text and a
/// `revealed` character count the typing task advances. A carried link stays
/// hidden until the reveal sequence shows it.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    content: String,
    revealed: usize,
    from_user: bool,
    timestamp: DateTime<Local>,
    link: Option<Link>,
    link_visible: bool,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        let revealed = content.chars().count();
        Self {
            content,
            revealed,
            from_user: true,
            timestamp: Local::now(),
            link: None,
            link_visible: false,
        }
    }

    /// A bot message starts fully hidden; the typing task reveals it.
    pub fn bot(content: String, link: Option<Link>) -> Self {
        Self {
            content,
            revealed: 0,
            from_user: false,
            timestamp: Local::now(),
            link,
            link_visible: false,
        }
    }

    pub fn from_user(&self) -> bool {
        self.from_user
    }

    pub fn visible_text(&self) -> String {
        self.content.chars().take(self.revealed).collect()
    }

    pub fn reveal_next(&mut self) {
        let total = self.content.chars().count();
        if self.revealed < total {
            self.revealed += 1;
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed >= self.content.chars().count()
    }

    pub fn show_link(&mut self) {
        self.link_visible = true;
    }

    pub fn link_visible(&self) -> bool {
        self.link_visible
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.base_style();

        self.render_header(&mut lines, base_style);
        self.render_content(&mut lines, area, base_style);
        self.render_link(&mut lines, base_style);
        self.render_footer(&mut lines, base_style);

        lines
    }

    fn base_style(&self) -> Style {
        let mut style = Style::default().fg(if self.from_user {
            Color::Rgb(255, 223, 128)
        } else {
            Color::Rgb(144, 238, 144)
        });

        if !self.is_fully_revealed() {
            style = style.add_modifier(Modifier::DIM);
        }

        style
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = format_clock(&self.timestamp);
        let status_icon = if self.is_fully_revealed() { "●" } else { "○" };
        let indent = if self.from_user { "  " } else { "" };

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
            Span::styled(" ", style),
            Span::styled(status_icon.to_string(), style),
        ]));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, area: Rect, style: Style) {
        let indent = if self.from_user { "  " } else { "" };
        let visible = self.visible_text();
        if visible.is_empty() {
            return;
        }

        let wrap_width = (area.width as usize).saturating_sub(4).max(1);
        for wrapped_line in wrap(&visible, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]));
        }
    }

    fn render_link(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        if !self.link_visible {
            return;
        }
        let link = match &self.link {
            Some(link) => link,
            None => return,
        };

        let indent = if self.from_user { "  " } else { "" };
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(
                format!("↗ {}", link.text),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!(" ({})", link.url),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let indent = if self.from_user { "  " } else { "" };
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_visible_immediately() {
        let msg = ChatMessage::user("hello there".to_string());
        assert!(msg.is_fully_revealed());
        assert_eq!(msg.visible_text(), "hello there");
    }

    #[test]
    fn test_bot_message_reveals_one_character_at_a_time() {
        let mut msg = ChatMessage::bot("abc".to_string(), None);
        assert_eq!(msg.visible_text(), "");

        msg.reveal_next();
        assert_eq!(msg.visible_text(), "a");
        msg.reveal_next();
        msg.reveal_next();
        assert_eq!(msg.visible_text(), "abc");
        assert!(msg.is_fully_revealed());

        // Past the end, reveal is a no-op.
        msg.reveal_next();
        assert_eq!(msg.visible_text(), "abc");
    }

    #[test]
    fn test_reveal_respects_char_boundaries() {
        let mut msg = ChatMessage::bot("héllo".to_string(), None);
        msg.reveal_next();
        msg.reveal_next();
        assert_eq!(msg.visible_text(), "hé");
    }

    #[test]
    fn test_link_hidden_until_shown() {
        let link = Link {
            text: "more".to_string(),
            url: "https://example.com".to_string(),
        };
        let mut msg = ChatMessage::bot("done".to_string(), Some(link));
        let area = Rect::new(0, 0, 40, 10);

        msg.revealed = msg.content.chars().count();
        let before = msg.render(area).len();
        msg.show_link();
        let after = msg.render(area).len();
        assert_eq!(after, before + 1);
    }
}
