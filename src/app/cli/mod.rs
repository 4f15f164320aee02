//! CLI Adapter.

mod build;
mod form;
mod progress;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cfrelease")]
#[command(version)]
#[command(
    about = "Package a 1C:Enterprise configuration release into an installer",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./cfrelease.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive release form (default)
    #[clap(visible_alias = "f")]
    Form,
    /// Print the most recent release folder name
    #[clap(visible_alias = "l")]
    Latest,
    /// Build a release without prompting
    #[clap(visible_alias = "b")]
    Build {
        /// Last release folder (defaults to the most recent one)
        #[arg(short, long)]
        previous: Option<String>,
        /// Next release folder (defaults to the last release with its build number incremented)
        #[arg(short, long, conflicts_with = "update")]
        next: Option<String>,
        /// Rebuild the last release in place instead of creating the next one
        #[arg(short, long)]
        update: bool,
    },
    /// Print the effective configuration
    Config,
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = crate::app::api::load_config(cli.config.as_deref())
        .and_then(|config| match cli.command.unwrap_or(Commands::Form) {
            Commands::Form => form::run_form(config).map(|_| 0),
            Commands::Latest => run_latest(&config).map(|_| 0),
            Commands::Build { previous, next, update } => {
                build::run_build(config, previous, next, update)
            }
            Commands::Config => run_config(&config).map(|_| 0),
        });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_latest(config: &crate::domain::BuilderConfig) -> Result<(), AppError> {
    let latest = crate::app::api::latest_release(config)?;
    println!("{}", latest);
    Ok(())
}

fn run_config(config: &crate::domain::BuilderConfig) -> Result<(), AppError> {
    print!("{}", crate::domain::config::parse::render_config(config)?);
    Ok(())
}
