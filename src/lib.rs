// src/lib.rs

#[macro_use]
pub mod macros;

pub mod app;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod rules;
pub mod status_indicator;
pub mod store;
pub mod typewriter;
pub mod ui;
pub mod utils;

pub use app::{App, WidgetState};
