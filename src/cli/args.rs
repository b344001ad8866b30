//! CLI argument definitions.

use crate::config::PackageStage;
use crate::constants::{APP_NAME, DEFAULT_CONFIG_PATH, DEFAULT_CONTAINER_BASE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VLM benchmark workspace configuration and container mount manager.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the workspace configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the workspace configuration file.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print host-to-container mount pairs for the container runtime.
    Volumes {
        /// Base directory inside the container.
        #[arg(long, default_value = DEFAULT_CONTAINER_BASE)]
        base: String,
    },
    /// Print the directory layout as seen from inside the container.
    ContainerConfig,
    /// Print the package list for a benchmark stage.
    Packages {
        /// Stage to list packages for (vlm_run or eval_run).
        stage: PackageStage,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create the default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print the configuration file path.
    Path,
}
