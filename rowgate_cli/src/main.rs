mod commands;
mod output;
mod table_io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rowgate")]
#[command(version, about = "Rule-driven validation for tabular batches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an input table against a rule file
    Validate {
        /// Path to the rule file (YAML or TOML)
        rules: String,

        /// Path to the input table (.csv, or a JSON array of objects)
        input: String,

        /// Where to write the kept rows (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Summary format: text, json
        #[arg(short, long, default_value = "text")]
        report: String,
    },

    /// Load and compile a rule file without validating data
    Check {
        /// Path to the rule file (YAML or TOML)
        rules: String,
    },

    /// Write a starter rule file
    Init {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                // keep stdout clean for table output
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            rules,
            input,
            output,
            report,
        } => commands::validate::execute(&rules, &input, output.as_deref(), &report),

        Commands::Check { rules } => commands::check::execute(&rules),

        Commands::Init { output } => commands::init::execute(output.as_deref()),
    }
}
