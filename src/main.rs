use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use grid_snake::app;
use grid_snake::config::GameConfig;
use grid_snake::error::AppError;
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(version, about = "Grid Snake in the terminal")]
struct Cli {
    /// JSON file overriding surface size, cell size, tick interval or start cells.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick interval in milliseconds; overrides the config file.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food and restart positions, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// File receiving log output (RUST_LOG controls the filter).
    #[arg(long = "log-file", default_value = "grid-snake.log")]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "grid-snake exited with an error");
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(&cli.log_file)?;

    let config = load_config(&cli)?;
    info!(?config, seed = ?cli.seed, "configuration loaded");

    let session = match cli.seed {
        Some(seed) => Session::new_with_seed(&config, seed),
        None => Session::new(&config),
    };

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    let best_score = app::run(&mut terminal, session)?;
    drop(terminal);

    println!("Best score this run: {best_score}");
    Ok(())
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let log_file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .finish()
        .try_init()?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };

    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
        config.validate()?;
    }

    Ok(config)
}
