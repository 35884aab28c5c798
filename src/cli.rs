//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use liftcheck::output::OutputMode;

/// liftcheck - Elevator safety inspections from the command line
#[derive(Parser, Debug)]
#[command(
    name = "liftcheck",
    version,
    about = "Evaluate elevator safety checklists against sensor readings",
    long_about = "Run safety inspections against a configured checklist.\n\n\
                  Each checklist item compares a sensor reading to its threshold\n\
                  band; results are aggregated into a SAFE/CAUTION/UNSAFE verdict."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an inspection and report the verdict
    Inspect {
        /// Elevator to inspect (e.g., EL-001)
        elevator_id: String,

        /// Path to a checklist definition (defaults to ~/.liftcheck/checklist.toml,
        /// falling back to the built-in checklist)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip storing the report in history
        #[arg(long)]
        no_store: bool,
    },

    /// Validate and list the checklist that would be used
    Checklist {
        /// Path to a checklist definition
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show stored inspections for an elevator
    History {
        /// Elevator id
        elevator_id: String,

        /// Maximum number of inspections to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Inspect {
            elevator_id,
            config,
            no_store,
        }) => commands::inspect(&elevator_id, config.as_deref(), no_store, output_mode),
        Some(Command::Checklist { config }) => commands::checklist(config.as_deref(), output_mode),
        Some(Command::History { elevator_id, limit }) => {
            commands::history(&elevator_id, limit, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("liftcheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("liftcheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'liftcheck --help' for usage");
                println!("Run 'liftcheck inspect <elevator-id>' to start an inspection");
            }
            Ok(())
        },
    }
}
