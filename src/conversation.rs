// src/conversation.rs

use crate::app::App;
use crate::chat_message::ChatMessage;
use crate::config::get_config;
use crate::constants::{FALLBACK_REPLY, GREETING, TOOLTIP_FALLBACK_DELAY_MS};
use crate::rules::Link;
use crate::store;
use crate::typewriter::Typewriter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{interval, sleep};

/// One-time startup load of the response rules.
///
/// Success replaces the store contents wholesale; failure keeps the built-in
/// defaults and logs a warning. Either way the onboarding tooltip is revealed
/// exactly once; the failure arm just waits a beat longer.
pub async fn load_responses(app: Arc<Mutex<App>>, source: &str) {
    match store::fetch_rules(source).await {
        Ok(rules) => {
            let mut guard = app.lock().await;
            let count = rules.len();
            guard.store.replace(rules);
            guard.logs.add(format!("Loaded {} responses", count));
            debug_print!("responses loaded from {}", source);
            guard.show_tooltip();
        }
        Err(e) => {
            log::warn!("failed to load responses from {}: {}", source, e);
            sleep(Duration::from_millis(TOOLTIP_FALLBACK_DELAY_MS)).await;
            let mut guard = app.lock().await;
            guard
                .logs
                .add("Response load failed, using built-in replies".to_string());
            guard.show_tooltip();
        }
    }
}

/// The first-open greeting: a short pause, then a typed bot message.
pub async fn greet(app: Arc<Mutex<App>>) {
    let config = get_config();
    sleep(Duration::from_millis(config.greeting_delay_ms)).await;
    deliver_reply(app, GREETING.to_string(), None).await;
}

/// Drives one full exchange: echo the user's message, look up a reply, hold
/// the loading indicator through the simulated-latency delay, then type the
/// reply out.
pub async fn submit_message(app: Arc<Mutex<App>>, text: String) {
    if text.trim().is_empty() {
        // No-op; the input buffer is left alone.
        return;
    }

    let config = get_config();
    let matched = {
        let mut guard = app.lock().await;
        guard.chat_messages.push(ChatMessage::user(text.clone()));
        guard.scroll_to_latest();
        guard.chat_input.clear();
        guard.status_indicator.set_thinking(true);
        guard.logs.add("Processing message...".to_string());
        guard.store.find_match(&text).cloned()
    };

    let delay_ms = if matched.is_some() {
        config.reply_delay_ms
    } else {
        config.no_match_delay_ms
    };
    sleep(Duration::from_millis(delay_ms)).await;

    let (reply, link) = match matched {
        Some(rule) => {
            debug_print!("matched rule {}", rule.id);
            (rule.response, rule.link)
        }
        None => (FALLBACK_REPLY.to_string(), None),
    };

    {
        let mut guard = app.lock().await;
        guard.status_indicator.set_thinking(false);
        guard.logs.add("Reply ready".to_string());
    }

    deliver_reply(app, reply, link).await;
}

/// Types a bot reply into the feed one character per tick, then reveals a
/// carried link after a further short delay. The view re-sticks to the latest
/// content on every step.
async fn deliver_reply(app: Arc<Mutex<App>>, reply: String, link: Option<Link>) {
    let config = get_config();
    let has_link = link.is_some();

    let idx = {
        let mut guard = app.lock().await;
        guard.chat_messages.push(ChatMessage::bot(reply.clone(), link));
        guard.scroll_to_latest();
        guard.chat_messages.len() - 1
    };

    let mut typewriter = Typewriter::new(&reply);
    let mut ticker = interval(Duration::from_millis(config.typing_interval_ms));
    while typewriter.step().is_some() {
        ticker.tick().await;
        let mut guard = app.lock().await;
        guard.chat_messages[idx].reveal_next();
        guard.scroll_to_latest();
    }

    if has_link {
        sleep(Duration::from_millis(config.link_delay_ms)).await;
        let mut guard = app.lock().await;
        guard.chat_messages[idx].show_link();
        guard.scroll_to_latest();
    }
}
