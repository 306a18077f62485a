use concierge::config::{get_config, initialize_config};
use concierge::logging::init_logging;
use concierge::{conversation, key_handlers, ui, App, WidgetState};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    initialize_config()?;
    let config = get_config();
    let _logger = init_logging(&config.log_level)?;

    let app_arc = Arc::new(Mutex::new(App::new()));

    // Single-attempt rule load; the widget runs on defaults until it lands.
    let loader_app = app_arc.clone();
    let rules_source = config.rules_source.clone();
    tokio::spawn(async move {
        conversation::load_responses(loader_app, &rules_source).await;
    });

    run_ui(app_arc).await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// Sets up the terminal, runs the widget, and restores the terminal even when
/// the run loop errors.
async fn run_ui(app_arc: Arc<Mutex<App>>) -> Result<(), Box<dyn Error + Send + Sync>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app_arc).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main loop: redraw, then wait for the next input or tick. Background reply
/// tasks mutate the shared state between iterations; the tick keeps the
/// spinner and typing animation moving.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_arc: Arc<Mutex<App>>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(50);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(50) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let mut guard = app_arc.lock().await;
            if guard.state == WidgetState::Quit {
                break;
            }
            guard.status_indicator.update_spinner();
            terminal.draw(|f| ui::draw(f, &mut guard))?;
        }

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => {
                let mut guard = app_arc.lock().await;
                match guard.state {
                    WidgetState::Launcher => {
                        key_handlers::handle_launcher_input(&mut guard, key, app_arc.clone())
                    }
                    WidgetState::Chat => {
                        key_handlers::handle_chat_input(&mut guard, key, app_arc.clone())
                    }
                    WidgetState::QuitConfirm => {
                        key_handlers::handle_quit_confirm_input(key, &mut guard)
                    }
                    WidgetState::Quit => {}
                }
            }
            Some(Event::Input(_)) | Some(Event::Tick) => {}
            None => break,
        }
    }

    Ok(())
}
