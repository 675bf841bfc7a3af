use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;
use tokio_util::sync::CancellationToken;

use ghsuggest::app::App;
use ghsuggest::config::{self, BuildEnv, Credentials};
use ghsuggest::github::{GitHubClient, UserLookup};
use ghsuggest::input::SearchInput;
use ghsuggest::logging;
use ghsuggest::notification::{AlertSeverity, NotificationState};
use ghsuggest::pipeline::{PipelineSettings, SuggestionPipeline};
use ghsuggest::users::UsersState;

/// How long to wait for terminal input before checking background work
const TICK_RATE: Duration = Duration::from_millis(50);

/// Search GitHub users from the terminal, with suggestions as you type
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which set of GitHub credential variables to read
    #[arg(long, value_enum)]
    env: Option<BuildEnv>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the suggestion debounce delay
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let mut config = loaded.config;
    if let Some(ms) = args.debounce_ms {
        config.search.debounce_ms = ms;
    }

    // Fail before touching the terminal so the message stays readable
    let env = args.env.unwrap_or_else(BuildEnv::current);
    let credentials = Credentials::from_env(env)?;
    let lookup: Arc<dyn UserLookup> = Arc::new(GitHubClient::new(credentials, &config.search)?);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let handle = runtime.handle().clone();
    let shutdown = CancellationToken::new();
    let driver = {
        let shutdown = shutdown.clone();
        thread::spawn(move || runtime.block_on(shutdown.cancelled()))
    };

    let pipeline = SuggestionPipeline::start(
        Arc::clone(&lookup),
        PipelineSettings::from(&config.search),
        &handle,
    );
    let search = SearchInput::new(pipeline.clone());
    let users = UsersState::new(lookup, handle, config.search.results_page_size());
    let mut notification =
        NotificationState::new(Duration::from_millis(config.alerts.timeout_ms));
    if let Some(warning) = loaded.warning {
        notification.show(&warning, AlertSeverity::Warning);
    }
    let app = App::new(search, users, notification);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    pipeline.stop();
    shutdown.cancel();
    if driver.join().is_err() {
        log::warn!("Async runtime thread panicked during shutdown");
    }

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?);
            needs_redraw = true;
        }

        if app.tick() {
            needs_redraw = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
