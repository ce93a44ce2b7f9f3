use atlas::adapters::{FilePreferences, InMemoryPreferences, ReqwestHttpClient};
use atlas::app::App;
use atlas::models::Country;
use atlas::source::CountrySource;
use atlas::traits::PreferenceStore;
use atlas::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Messages from background tasks into the event loop.
enum AppMessage {
    /// The one-shot fetch completed.
    Countries(Vec<Country>),
    /// The fetch failed; the record set stays empty.
    FetchFailed,
}

/// Spawn the one-shot country fetch, reporting back over the channel.
///
/// No retry and no timeout beyond the client defaults: on failure the
/// error is logged and the app browses an empty list.
fn spawn_fetch(tx: mpsc::UnboundedSender<AppMessage>) {
    tokio::spawn(async move {
        let source = CountrySource::new(Arc::new(ReqwestHttpClient::new()));
        match source.fetch_all().await {
            Ok(countries) => {
                let _ = tx.send(AppMessage::Countries(countries));
            }
            Err(e) => {
                tracing::error!("country fetch failed: {}", e);
                let _ = tx.send(AppMessage::FetchFailed);
            }
        }
    });
}

/// Initialize tracing to a log file in the data directory.
///
/// A TUI owns the terminal, so nothing may log to stdout/stderr while the
/// app runs. If no data directory is available, logging is simply off.
fn init_tracing() {
    let Some(dir) = dirs::data_dir().map(|d| d.join("atlas")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("atlas.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    // Preference store: file-backed, or in-memory when the platform has
    // no data directory to offer.
    let prefs: Box<dyn PreferenceStore> = match FilePreferences::new() {
        Some(store) => Box::new(store),
        None => Box::new(InMemoryPreferences::new()),
    };
    let mut app = App::new(prefs);

    // Kick off the one-shot fetch before taking over the terminal.
    let (message_tx, mut message_rx) = mpsc::unbounded_channel();
    spawn_fetch(message_tx.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &message_tx, &mut message_rx).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    message_tx: &mpsc::UnboundedSender<AppMessage>,
    message_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            // One-shot fetch completion (and manual refetches)
            Some(message) = message_rx.recv() => {
                match message {
                    AppMessage::Countries(countries) => app.countries_loaded(countries),
                    AppMessage::FetchFailed => app.mark_fetch_failed(),
                }
            }

            // Keyboard events
            event_result = event_stream.next() => {
                let Some(Ok(event)) = event_result else {
                    continue;
                };
                match event {
                    Event::Resize(_, _) => continue,
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.quit();
                            }
                            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                            KeyCode::Char('s') => app.toggle_sort(),
                            KeyCode::Char('f') => app.cycle_filter(),
                            KeyCode::Char('p') => app.cycle_page_size(),
                            KeyCode::Left => app.prev_page(),
                            KeyCode::Right => app.next_page(),
                            KeyCode::Up => app.select_prev(),
                            KeyCode::Down => app.select_next(),
                            KeyCode::Char('r') => {
                                app.begin_refetch();
                                spawn_fetch(message_tx.clone());
                            }
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
