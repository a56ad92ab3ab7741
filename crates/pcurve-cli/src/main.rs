//! CLI for pcurve: score reported p-values for signs of p-hacking.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pcurve")]
#[command(about = "pcurve: does this p-curve look right-skewed, or bunched up at 0.05?")]
#[command(version = pcurve_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score p-value lists: integrity score, status, bucket counts.
    /// Each file holds numbers separated by whitespace/commas, or a JSON array.
    /// Reads stdin when no file (or "-") is given.
    Analyze {
        /// Input files ("-" for stdin)
        files: Vec<String>,

        /// Fail on non-numeric tokens instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Write a Markdown report to this path
        #[arg(long)]
        output: Option<String>,

        /// Exit with status 2 if any input is at or above this risk level
        #[arg(long, value_parser = ["moderate", "high"])]
        fail_on: Option<String>,
    },

    /// Print bucket counts and the risk ratio as JSON
    Summarize {
        /// Input files ("-" for stdin)
        files: Vec<String>,

        /// Fail on non-numeric tokens instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Map a raw risk ratio to its integrity score and status
    Score {
        /// Risk ratio (risky / max(highly significant, 1))
        #[arg(allow_negative_numbers = true)]
        ratio: f64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            strict,
            json,
            output,
            fail_on,
        } => commands::analyze::run(commands::analyze::AnalyzeCommandConfig {
            files: &files,
            strict,
            json,
            output_path: output.as_deref(),
            fail_on: fail_on.as_deref(),
        }),
        Commands::Summarize { files, strict } => commands::summarize::run(&files, strict),
        Commands::Score { ratio } => commands::score::run(ratio),
    }
}
