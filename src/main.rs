use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use klondike_cli::game::Game;
use klondike_cli::renderer::CliRenderer;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deal a reproducible game from this seed
    #[arg(long, value_name = "NUM")]
    seed: Option<u64>,
    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
    /// Log every operation to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!(
        r#"
┌─────────────────────────────────────────┐
│        Klondike Solitaire (CLI)         │
│   Type 'help' or '?' for commands.      │
└─────────────────────────────────────────┘
"#
    );

    let color = !cli.no_color && io::stdout().is_terminal();
    let mut game = Game::init(cli.seed, CliRenderer::new(color));
    game.run(io::stdin().lock())
        .context("Failed to read command from stdin")?;
    Ok(())
}
