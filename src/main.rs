/*
[INPUT]:  CLI arguments and interactive terminal input
[OUTPUT]: Running taskdesk TUI session with tracing routed into the log panel
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod tui;

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskdesk::TaskStore;

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "taskdesk", version, about = "Terminal task list manager")]
struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Stdout belongs to the alternate screen for the whole session, so
    // tracing output is captured in a ring buffer and rendered by the
    // Logs tab instead.
    let log_buffer: LogBufferHandle = Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    init_tracing(&args.log_level, LogWriterFactory::new(log_buffer.clone()))?;

    info!("starting taskdesk");

    let store = TaskStore::new();
    tui::run_tui(store, log_buffer).await?;

    Ok(())
}

fn init_tracing(log_level: &str, writer: LogWriterFactory) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
