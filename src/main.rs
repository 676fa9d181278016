use std::fs;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Context;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::info;

use mentor::adapters::ReqwestHttpClient;
use mentor::api::ApiClient;
use mentor::app::{App, AppMessage};
use mentor::cli::{self, CliCommand, Config};
use mentor::storage::Storage;
use mentor::{input, terminal, ui};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args(), std::env::var("MENTOR_SERVER_URL").ok()) {
        CliCommand::Version => {
            println!("mentor {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            print!("{}", cli::HELP_TEXT);
            Ok(())
        }
        CliCommand::Run(config) => run(config).await,
    }
}

async fn run(config: Config) -> Result<()> {
    let storage = Storage::new()?;
    init_logging(&storage)?;
    info!("starting mentor {} against {}", VERSION, config.server_url);

    let client = Arc::new(ApiClient::new(
        config.server_url,
        Arc::new(ReqwestHttpClient::new()),
    ));
    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(client, storage, message_tx);

    terminal::install_panic_hook();
    let mut tui = terminal::enter().wrap_err("failed to enter TUI mode")?;
    let result = run_app(&mut tui, &mut app, message_rx).await;
    terminal::restore();
    result
}

/// Log to a file in the data dir so the TUI output stays clean. Level comes
/// from `RUST_LOG`, defaulting to info.
fn init_logging(storage: &Storage) -> Result<()> {
    let log_path = storage.root().join("mentor.log");
    let file = fs::File::create(&log_path)
        .wrap_err_with(|| format!("failed to open log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app(
    tui: &mut terminal::Tui,
    app: &mut App,
    mut message_rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    // Held across iterations so a busy event or message stream cannot
    // starve the tick.
    let mut tick = tokio::time::interval(Duration::from_millis(16));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        if app.take_dirty() {
            tui.draw(|frame| ui::render(frame, app))?;
        }

        tokio::select! {
            _ = tick.tick() => {
                app.on_tick();
            }
            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => input::handle_key(app, key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {e}");
                    }
                    None => break,
                    _ => {}
                }
            }
            message = message_rx.recv() => {
                match message {
                    Some(message) => app.handle_message(message),
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
