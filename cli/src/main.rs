//! phrasewheel CLI - binary entry point.
//!
//! # Architecture
//!
//! The CLI is a thin shell around the pure pipeline in [`phrasewheel_core`]:
//!
//! ```text
//! main() -> Cli::parse() -> load config -> arrange | suggest | title
//!                                             |
//!                                             v
//!                      stdout: card layout / phrases, stderr: logs + counts
//! ```
//!
//! Stdout only ever carries results, so `phrasewheel suggest | phrasewheel arrange`
//! works as expected.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use phrasewheel_config::PhraseWheelConfig;

/// Log filter comes from `RUST_LOG`; warnings and errors only by default.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}

#[derive(Parser)]
#[command(name = "phrasewheel", version)]
#[command(about = "Lay out phrases on printable two-sided party-game cards")]
struct Cli {
    /// Config file to use instead of ~/.phrasewheel/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Arrange phrases onto the front and back of a card
    Arrange(ArrangeArgs),
    /// Print a random batch of example phrases, one per line
    Suggest(SuggestArgs),
    /// Title-case phrases the way they are printed on cards
    Title {
        /// Phrases to convert (reads lines from stdin when omitted)
        phrases: Vec<String>,
    },
}

#[derive(Args)]
struct ArrangeArgs {
    /// File with one phrase per line; reads stdin when omitted or "-"
    file: Option<PathBuf>,

    /// Slots per card face
    #[arg(long)]
    capacity: Option<usize>,

    /// Shuffle deterministically with this seed
    #[arg(long, allow_negative_numbers = true, conflicts_with = "shuffle")]
    seed: Option<i32>,

    /// Shuffle with a fresh random seed (printed so the card can be reproduced)
    #[arg(long)]
    shuffle: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct SuggestArgs {
    /// Number of suggestions
    #[arg(long)]
    count: Option<usize>,

    /// JSON corpus file (`{"category": ["phrase", ...]}`) instead of the builtin list
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Only draw from this category (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One slot per line with its angle
    Text,
    /// Card layout as JSON
    Json,
}

/// Load the user config, falling back to defaults when it is absent or broken.
fn load_user_config() -> PhraseWheelConfig {
    match PhraseWheelConfig::load() {
        Ok(Some(config)) => config,
        // A broken file was already logged by the loader.
        Ok(None) | Err(_) => PhraseWheelConfig::default(),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PhraseWheelConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => load_user_config(),
    };

    match cli.command {
        Commands::Arrange(args) => commands::arrange(args, &config),
        Commands::Suggest(args) => {
            commands::suggest(args, &config);
            Ok(())
        }
        Commands::Title { phrases } => commands::title(phrases),
    }
}
