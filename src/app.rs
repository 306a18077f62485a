use crate::chat_message::ChatMessage;
use crate::log_view::LogView;
use crate::status_indicator::StatusIndicator;
use crate::store::ResponseStore;

/// Which face of the widget is showing. `Launcher` is the closed widget;
/// minimize and close both land back here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Launcher,
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: WidgetState,
    pub launcher_items: Vec<&'static str>,
    pub selected_launcher_item: usize,
    pub store: ResponseStore,
    pub chat_messages: Vec<ChatMessage>,
    pub chat_input: String,
    pub chat_scroll: u16,
    pub follow_latest: bool,
    pub last_max_scroll: u16,
    pub logs: LogView,
    pub logs_scroll: u16,
    pub status_indicator: StatusIndicator,
    pub tooltip_visible: bool,
    first_open: bool,
}

impl App {
    pub fn new() -> App {
        App {
            state: WidgetState::Launcher,
            launcher_items: vec!["open chat", "quit"],
            selected_launcher_item: 0,
            store: ResponseStore::with_defaults(),
            chat_messages: Vec::new(),
            chat_input: String::new(),
            chat_scroll: 0,
            follow_latest: true,
            last_max_scroll: 0,
            logs: LogView::new(),
            logs_scroll: 0,
            status_indicator: StatusIndicator::new(),
            tooltip_visible: false,
            first_open: true,
        }
    }

    /// Opens the chat panel. Returns true exactly once, on the first-ever
    /// open, signalling that the greeting is due.
    pub fn open(&mut self) -> bool {
        self.state = WidgetState::Chat;
        self.tooltip_visible = false;
        let greeting_due = self.first_open;
        self.first_open = false;
        greeting_due
    }

    /// Hides the panel and shows the launcher again. History is kept.
    pub fn minimize(&mut self) {
        self.state = WidgetState::Launcher;
    }

    /// Behaviorally the same as minimize: back to the launcher, history kept.
    pub fn close(&mut self) {
        self.state = WidgetState::Launcher;
    }

    /// The one-shot "ready" signal after the rule load settles.
    pub fn show_tooltip(&mut self) {
        self.tooltip_visible = true;
    }

    pub fn scroll_up(&mut self) {
        self.follow_latest = false;
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
        if self.chat_scroll >= self.last_max_scroll {
            self.follow_latest = true;
        }
    }

    /// Re-sticks the view to the newest content; the draw pass resolves the
    /// actual offset.
    pub fn scroll_to_latest(&mut self) {
        self.follow_latest = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_one_shot() {
        let mut app = App::new();
        assert!(app.open());

        app.minimize();
        assert!(!app.open());

        app.close();
        assert!(!app.open());
    }

    #[test]
    fn test_minimize_and_close_both_return_to_launcher() {
        let mut app = App::new();
        app.open();
        app.minimize();
        assert_eq!(app.state, WidgetState::Launcher);

        app.open();
        app.close();
        assert_eq!(app.state, WidgetState::Launcher);
    }

    #[test]
    fn test_history_survives_minimize() {
        let mut app = App::new();
        app.open();
        app.chat_messages
            .push(crate::chat_message::ChatMessage::user("hi".to_string()));
        app.minimize();
        app.open();
        assert_eq!(app.chat_messages.len(), 1);
    }

    #[test]
    fn test_opening_dismisses_tooltip() {
        let mut app = App::new();
        app.show_tooltip();
        assert!(app.tooltip_visible);
        app.open();
        assert!(!app.tooltip_visible);
    }
}
