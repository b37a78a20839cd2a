//! Event loop driving the terminal UI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc, time::Duration};

use crate::args::{Args, apply_query};
use crate::config::Settings;
use crate::state::ProductField;
use crate::store::{CatalogStore, ProductSource};

use super::terminal::{restore_terminal, setup_terminal};
use super::{App, Command, Outcome, handle_outcome, open_source, spawn_command};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that runs the loop without a terminal.
pub const HEADLESS_ENV: &str = "STOCKROOM_TEST_HEADLESS";

const TICK: Duration = Duration::from_millis(200);

/// What: Spawn a thread that forwards terminal events into `event_tx`.
///
/// Inputs:
/// - `event_tx`: Channel the events are sent on
/// - `cancelled`: Set by the loop on exit; the thread stops on its next poll
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed without waiting for a key.
/// - Transient read errors are ignored; a closed channel ends the thread.
fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// Channels between key handlers, background actions and the loop.
struct Channels {
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_rx: mpsc::UnboundedReceiver<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
    cmd_tx: mpsc::UnboundedSender<Command>,
    cmd_rx: mpsc::UnboundedReceiver<Command>,
    out_tx: mpsc::UnboundedSender<Outcome>,
    out_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl Channels {
    fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            cmd_tx,
            cmd_rx,
            out_tx,
            out_rx,
        }
    }
}

/// What: Run the Stockroom TUI end to end.
///
/// Inputs:
/// - `args`: Parsed command line; its search, filters and sorts seed the listing
/// - `settings`: Effective settings (settings.conf plus command-line overrides)
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on terminal setup/IO failures.
///
/// Details:
/// - Starts the initial fetch immediately; the list renders a loading state until it lands.
/// - With `STOCKROOM_TEST_HEADLESS=1` no terminal is touched and the loop returns once the
///   initial fetch has been handled.
pub async fn run(args: &Args, settings: Settings) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let source = open_source(&settings)?;
    let store = CatalogStore::new(source, settings.query_defaults());
    apply_query(&store, args);

    tracing::info!(
        headless,
        per_page = settings.items_per_page,
        dataset = settings
            .dataset_path
            .as_ref()
            .map_or_else(|| "<bundled>".to_string(), |p| p.display().to_string()),
        "starting UI"
    );

    let mut app = App::new(store, settings);
    let mut channels = Channels::new();

    if !headless {
        setup_terminal()?;
        spawn_event_thread(
            channels.event_tx.clone(),
            channels.event_thread_cancelled.clone(),
        );
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let _ = channels.cmd_tx.send(Command::Fetch);
    run_event_loop(&mut terminal, &mut app, &mut channels, args.page, headless).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("UI closed");
    Ok(())
}

async fn run_event_loop<S: ProductSource>(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut App<S>,
    channels: &mut Channels,
    mut pending_page: Option<usize>,
    headless: bool,
) {
    let mut tick = tokio::time::interval(TICK);
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| crate::ui::ui(f, app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app, &channels.cmd_tx) {
                    app.should_quit = true;
                }
            }
            Some(cmd) = channels.cmd_rx.recv() => {
                spawn_command(&app.store, cmd, channels.out_tx.clone());
            }
            Some(outcome) = channels.out_rx.recv() => {
                let fetched = matches!(outcome, Outcome::Fetched(_));
                handle_outcome(app, outcome);
                if fetched
                    && let Some(page) = pending_page.take()
                    && !app.store.set_page(page)
                {
                    app.toasts.warning(format!("Page {page} does not exist"), None);
                }
                if fetched && headless {
                    tracing::info!(
                        count = app.store.with_state(|s| s.products().len()),
                        sorted_by = ?app.store.query().sort_by.map(ProductField::as_config_key),
                        "headless run finished initial fetch"
                    );
                    app.should_quit = true;
                }
            }
            _ = tick.tick() => {
                app.on_tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }
}
