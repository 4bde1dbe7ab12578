#![forbid(unsafe_code)]

//! `bot-sim` — toy robot simulator binary.
//!
//! Reads commands from a file (or stdin when no file is given), runs the
//! streaming pipeline over the configured grid, and writes position reports
//! to stdout.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use bot_sim::engine::pipeline;
use bot_sim::models::Grid;
use bot_sim::{AppError, GlobalConfig, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "bot-sim", about = "Toy robot simulator", version, long_about = None)]
struct Cli {
    /// Optional file containing commands; reads from stdin when omitted.
    file: Option<PathBuf>,

    /// Path to an optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width override.
    #[arg(long)]
    grid_width: Option<i32>,

    /// Grid height override.
    #[arg(long)]
    grid_height: Option<i32>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;

    // The pipeline is single-pass and strictly sequential; one thread is
    // all it can use.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GlobalConfig::load(path)?,
        None => GlobalConfig::default(),
    };

    // CLI overrides take precedence over the config file.
    if let Some(width) = args.grid_width {
        config.grid.width = width;
    }
    if let Some(height) = args.grid_height {
        config.grid.height = height;
    }
    config.validate()?;

    let grid = Grid::new(config.grid.width, config.grid.height);
    let sink = tokio::io::stdout();

    match args.file {
        Some(path) => {
            let source = File::open(&path)
                .await
                .map_err(|err| AppError::Io(format!("cannot open {}: {err}", path.display())))?;
            run_until_interrupt(grid, source, sink).await
        }
        None => run_until_interrupt(grid, tokio::io::stdin(), sink).await,
    }
}

/// Drive the pipeline to completion, or exit cleanly on Ctrl-C.
async fn run_until_interrupt<R, W>(grid: Grid, source: R, sink: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tokio::select! {
        result = pipeline::run(grid, source, sink) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, exiting");
            Ok(())
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
