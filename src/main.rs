use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

use askterm::app::App;
use askterm::config::{self, ConfigResult};
use askterm::logging;
use askterm::service::HttpAnswerService;
use askterm::worker::spawn_worker;

/// How long to wait for input before redrawing
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Ask questions about your documents from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the answering service (overrides the config file)
    #[arg(long, value_name = "BASE_URL")]
    url: Option<String>,

    /// Path to a config file (default: ~/.config/askterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    let log_path = logging::init();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(url) = args.url {
        config.service.base_url = url;
    }

    let service = HttpAnswerService::new(&config.service)?;
    log::info!("Using answering service at {}", service.base_url());

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    let mut app = App::new(service.base_url().to_string());
    spawn_worker(service, request_rx, response_tx);
    app.connect(request_tx, response_rx);

    if let Some(warning) = warning {
        app.notification.show_warning(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    // Pasted text arrives as one event instead of a burst of key presses
    let result = execute!(std::io::stdout(), EnableBracketedPaste)
        .map_err(Into::into)
        .and_then(|()| run(terminal, &mut app));
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    if let Some(path) = log_path {
        log::info!("Exiting; log written to {}", path.display());
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        app.poll_worker();
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
