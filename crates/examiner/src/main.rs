//! examiner CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "examiner")]
#[command(version)]
#[command(about = "Convert question outlines into Moodle XML quizzes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an outline into a quiz file
    Convert {
        /// Outline file (.yaml, .yml or .json)
        input: PathBuf,

        /// Write output to FILE (use '--output -' for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Conversion settings (TOML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Leave out questions that cannot be converted instead of stopping
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Build every question and report problems without writing anything
    Check {
        /// Outline file (.yaml, .yml or .json)
        input: PathBuf,

        /// Conversion settings (TOML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so that `--output -` stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "examiner=info,examiner_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            skip_invalid,
        } => commands::convert::execute(commands::convert::ConvertArgs {
            input,
            output,
            config,
            skip_invalid,
        }),
        Commands::Check {
            input,
            config,
            json,
        } => commands::check::execute(commands::check::CheckArgs {
            input,
            config,
            json,
        }),
    }
}
