mod action;
mod app;
mod command;
mod config;
mod domain;
mod notify;
mod ui;
mod update;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use action::Action;
use app::App;
use command::{Command, execute_command};
use config::ClientConfig;
use domain::api::{Backend, HttpBackend};
use domain::budget::Budget;

#[derive(Parser)]
#[command(name = "splants-settings")]
#[command(about = "SPLANTS settings - budget, feature status and webhook configuration")]
#[command(version)]
struct Cli {
    /// Backend API base URL
    #[arg(long, env = "SPLANTS_API_BASE_URL")]
    base_url: Option<String>,

    /// API key sent as X-API-Key
    #[arg(long, env = "SPLANTS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    /// Monthly budget in dollars
    #[arg(long, default_value_t = 80.0, value_parser = parse_amount)]
    monthly_budget: f64,

    /// Spend so far this month in dollars
    #[arg(long, default_value_t = 42.0, value_parser = parse_amount)]
    current_usage: f64,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "splants-settings.log")]
    log_file: PathBuf,
}

/// A dollar amount: finite and not negative
fn parse_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("{s} is not a valid dollar amount"));
    }
    Ok(amount)
}

fn init_logging(path: &std::path::Path) -> WorkerGuard {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "splants-settings.log".into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_logging(&cli.log_file);

    let config = ClientConfig::resolve(cli.base_url.as_deref(), cli.api_key.as_deref());
    tracing::info!(
        api_base_url = %config.api_base_url,
        api_key_configured = config.has_api_key(),
        "starting"
    );

    let backend: Arc<dyn Backend> = Arc::new(
        HttpBackend::new(config.clone(), Duration::from_secs(cli.timeout_secs))
            .context("Failed to build HTTP client")?,
    );
    let mut app = App::new(
        Budget::new(cli.monthly_budget, cli.current_usage),
        config.has_api_key(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_term)?;

    let result = run_app(&mut terminal, &mut app, backend, &config).await;
    app.public_config.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}

/// Run each command on its own task and send its result back as an action
fn dispatch(
    commands: Vec<Command>,
    backend: &Arc<dyn Backend>,
    tx: &mpsc::UnboundedSender<Action>,
) {
    for command in commands {
        let backend = Arc::clone(backend);
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(action) = execute_command(command, backend.as_ref()).await {
                let _ = tx.send(action);
            }
        });
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: Arc<dyn Backend>,
    config: &ClientConfig,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let commands = update::init(app);
    dispatch(commands, &backend, &tx);

    loop {
        app.prune_notifications(Instant::now());
        terminal.draw(|f| ui::render(f, app, &config.api_base_url))?;

        if app.should_quit {
            break;
        }

        while let Ok(action) = rx.try_recv() {
            let commands = update::update(app, action);
            dispatch(commands, &backend, &tx);
        }

        // Poll for events
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let commands = update::update(
                app,
                Action::Input {
                    code: key.code,
                    modifiers: key.modifiers,
                },
            );
            dispatch(commands, &backend, &tx);
        }
    }

    tracing::info!("quit requested");
    Ok(())
}
