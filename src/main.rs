//! Testforge
//!
//! Test skeleton generator for module-structured Rust projects.
//!
//! Scans a module's controllers, entities, and forms and renders one
//! ready-to-fill test file per class under the module's test tree.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::GenerateCommand;
use testforge_core::ArtifactKind;

#[derive(Parser)]
#[command(name = "testforge")]
#[command(version)]
#[command(about = "Generate test skeletons from a module's source tree", long_about = None)]
struct Cli {
    /// Explicit configuration file (defaults to <module>/testforge.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate request-test skeletons for a module's controllers
    Controller {
        /// Module root directory
        module: PathBuf,
    },
    /// Generate column-test skeletons for a module's entities
    Entity {
        /// Module root directory
        module: PathBuf,
        /// Overwrite test files that already exist
        #[arg(long)]
        regen: bool,
    },
    /// Generate submission-test skeletons for a module's forms
    Form {
        /// Module root directory
        module: PathBuf,
        /// Overwrite test files that already exist
        #[arg(long)]
        regen: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .init();

    let command = match cli.command {
        Commands::Controller { module } => {
            GenerateCommand::new(ArtifactKind::Controller, module, cli.config)?
        }
        Commands::Entity { module, regen } => {
            GenerateCommand::new(ArtifactKind::Entity, module, cli.config)?.with_regen(regen)
        }
        Commands::Form { module, regen } => {
            GenerateCommand::new(ArtifactKind::Form, module, cli.config)?.with_regen(regen)
        }
    };

    command.execute()
}
