//! UCI front end for the classical evaluator and move orderer.
//!
//! There is no search: `go` answers with the first move of the forcing-move
//! order. Logs go to stderr (filter with `RUST_LOG`), so stdout carries only
//! UCI traffic.

mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use classical_engine::EngineConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use session::{Flow, Session};

fn print_usage() {
    println!("Usage: uci_engine [--config <path.toml>]");
}

/// Returns the config path, or `None` when running with defaults.
fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match parse_args()? {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    info!(piece_values = ?config.piece_values, "engine ready");

    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut session = Session::new(config.piece_values);

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match session.handle(line.trim(), &mut stdout) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                warn!("command failed: {e:#}");
                writeln!(stdout, "info string error {e:#}")?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}
