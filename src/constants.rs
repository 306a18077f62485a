// Reply sequencing (milliseconds)
pub const TYPING_INTERVAL_MS: u64 = 20;
pub const REPLY_DELAY_MS: u64 = 500;
pub const NO_MATCH_DELAY_MS: u64 = 1000;
pub const LINK_DELAY_MS: u64 = 500;
pub const GREETING_DELAY_MS: u64 = 100;

// The tooltip still appears when the rules load fails, just later.
pub const TOOLTIP_FALLBACK_DELAY_MS: u64 = 2000;

pub const GREETING: &str = "Hello, I'm the Concierge assistant. How can I help you today?";
pub const FALLBACK_REPLY: &str = "I am sorry, I can't reply to that.";
pub const TOOLTIP_TEXT: &str = "Need help? Open the chat and ask away.";

pub const DEFAULT_RULES_SOURCE: &str = "responses.json";
