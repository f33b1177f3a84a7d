mod app;
mod config;
mod logging;
mod script;
mod store;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::logging::ChatLogger;
use crate::script::scheduler::PlaybackScheduler;
use crate::store::session::SessionStore;
use crate::store::unseen::UnseenTracker;
use crate::store::{JsonFileStore, KvStore};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;

    let data_dir = config::data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;

    // Trace to a file; the terminal belongs to the UI
    let trace_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("papatya.log"))?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(trace_file))
        .with_ansi(false)
        .init();
    info!("papatya starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("papatya exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let data_dir = config::data_dir();
    let unseen_store: Box<dyn KvStore> = Box::new(JsonFileStore::open(data_dir.join("unseen.json"))?);
    let session_store: Box<dyn KvStore> =
        Box::new(JsonFileStore::open(data_dir.join("session.json"))?);

    let mut state = AppState::new(
        cfg.clone(),
        UnseenTracker::new(unseen_store),
        SessionStore::new(session_store),
    );
    let mut scheduler = PlaybackScheduler::new(event_tx.clone(), cfg.pacing.clone());
    let mut chat_logger = ChatLogger::new(&cfg.logging);

    // Welcome chime, at most once an hour across runs
    if cfg.behavior.intro_chime && state.session.chime_allowed() {
        state.pending_bell = true;
        let _ = state.session.record_chime();
    }

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Drain new records for logging
        let new_records: Vec<_> = state.new_records.drain(..).collect();
        for (key, record) in &new_records {
            chat_logger.log_record(key, record);
        }

        // Process actions
        for action in actions {
            match action {
                Action::StartConnect {
                    nickname,
                    server_name,
                } => {
                    info!(server = %server_name, "starting scripted connection");
                    scheduler.start_connection(nickname, server_name);
                }
                Action::StartChannelJoins { channels } => {
                    scheduler.start_channel_joins(channels);
                }
                Action::StartReplay { channel } => {
                    let stream = script::build_channel_stream(&channel, &cfg);
                    let profile = cfg.density_profile(&channel);
                    info!(channel = %channel, events = stream.len(), "starting replay");
                    scheduler.start_replay(channel, profile, stream);
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            info!(message = %cfg.behavior.quit_message, "quit");
            break;
        }

        // Bell
        if state.pending_bell {
            let _ = io::stdout().write_all(b"\x07");
            let _ = io::stdout().flush();
            state.pending_bell = false;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    scheduler.dispose();
    Ok(())
}
