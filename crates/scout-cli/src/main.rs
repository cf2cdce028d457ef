//! Scout CLI
//!
//! Command-line interface for the Scout search phrase interpreter.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "scout")]
#[command(author, version, about = "Turn search phrases into structured filters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// How to print an interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
    /// URL query string
    Query,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a single search phrase
    Interpret {
        /// Search phrase
        phrase: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Location to use when the phrase names none
        #[arg(short, long)]
        default_location: Option<String>,
    },

    /// Interpret one phrase per line, printing one JSON object per line
    Batch {
        /// Input file (defaults to stdin)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose {
        "scout_cli=debug,scout_core=debug"
    } else {
        "scout_cli=info,scout_core=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Interpret {
            phrase,
            format,
            default_location,
        } => {
            commands::interpret::run(&phrase, format, default_location.as_deref())?;
        }
        Commands::Batch { file } => {
            commands::batch::run(file)?;
        }
    }

    Ok(())
}
