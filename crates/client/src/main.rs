//! Kill confidence client binary.
//!
//! Composition root: loads `.env`, sets up logging, builds the runtime over a
//! replay scenario, forwards stdin commands, and renders to the terminal.
//!
//! ```bash
//! KILLCALC_SCENARIO=path/to/fight.ron cargo run -p killcalc-client
//! ```
mod input;
mod terminal;

use anyhow::Result;
use client_bootstrap::{ClientConfig, RuntimeBuilder, setup_logging};
use runtime::{Command, RuntimeHandle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::terminal::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = setup_logging(&config.session_id)?;

    tracing::info!(
        tick_ms = u64::try_from(config.runtime.tick_period.as_millis()).unwrap_or(u64::MAX),
        start_enabled = config.runtime.start_enabled,
        "starting killcalc"
    );

    let setup = RuntimeBuilder::new(config)
        .renderer(TerminalRenderer::new())
        .build()
        .await?;

    println!("{}", input::HELP);
    let handle = setup.runtime.handle();
    tokio::spawn(forward_stdin(handle.clone()));
    tokio::spawn(quit_on_ctrl_c(handle));

    setup.runtime.wait().await?;

    let unknown = setup.catalog.unknown_counts();
    if unknown.champions + unknown.items > 0 {
        tracing::info!(
            champions = unknown.champions,
            items = unknown.items,
            "ids missing from the catalog"
        );
    }
    tracing::info!("killcalc stopped");
    Ok(())
}

/// Reads one command per line. End of input quits.
async fn forward_stdin(handle: RuntimeHandle) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let command = match lines.next_line().await {
            Ok(Some(line)) => match input::parse_command(&line) {
                Some(command) => command,
                None => {
                    if !line.trim().is_empty() {
                        println!("{}", input::HELP);
                    }
                    continue;
                }
            },
            Ok(None) => Command::Quit,
            Err(err) => {
                tracing::warn!(error = %err, "stdin read failed");
                Command::Quit
            }
        };

        if handle.send(command).await.is_err() || command == Command::Quit {
            break;
        }
    }
}

async fn quit_on_ctrl_c(handle: RuntimeHandle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        let _ = handle.quit().await;
    }
}
