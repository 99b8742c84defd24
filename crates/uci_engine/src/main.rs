mod session;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use heuristic_engine::HeuristicEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trainer_core::EngineConfig;

use crate::session::UciSession;

#[derive(Parser, Debug)]
#[command(name = "trainer_uci", version, about = "UCI front-end for the heuristic chess trainer")]
struct Cli {
    /// TOML configuration file; missing means defaults
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath, default_value = "trainer.toml")]
    config: PathBuf,

    /// Starting difficulty level, overriding the config file
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=8))]
    level: Option<u8>,

    /// RNG seed for reproducible weakened play
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(level) = cli.level {
        config.level = level;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    init_logging(&config.log_filter);

    let engine = HeuristicEngine::from_config(&config)?;
    info!(
        level = engine.level().name,
        depth_cap = config.depth_cap,
        "engine ready"
    );

    // UCI engines communicate via stdin/stdout; logs go to stderr.
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut session = UciSession::new(engine);

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if !session.handle(line.trim(), &mut stdout)? {
            break;
        }
    }
    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
