//! Vlmbench - VLM benchmark workspace configuration tool.
//!
//! This crate owns the workspace configuration document of a VLM
//! benchmarking harness and derives the container mount mappings the
//! harness passes to its container runtime.

#![warn(missing_docs)]
#![allow(clippy::print_stdout)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::ConfigManager;
use std::path::Path;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the vlmbench CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Config { action } => handle_config_command(action, &cli.config),
        Command::Volumes { base } => {
            let manager = ConfigManager::new(&cli.config, false)?;
            let volumes = manager.get_volumes(&base);
            debug!("Derived {} mount(s) from {}", volumes.len(), cli.config.display());
            for (host_path, container_path) in &volumes {
                println!("{host_path}:{container_path}");
            }
            Ok(())
        }
        Command::ContainerConfig => {
            let manager = ConfigManager::new(&cli.config, false)?;
            let container = manager.get_container_config();
            let rendered = serde_json::to_string_pretty(&container)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            println!("{rendered}");
            Ok(())
        }
        Command::Packages { stage } => {
            let manager = ConfigManager::new(&cli.config, false)?;
            let packages = manager.load_packages(stage)?;
            debug!("Loaded {} package(s) for stage {stage}", packages.len());
            for package in &packages {
                println!("{package}");
            }
            Ok(())
        }
    }
}

fn handle_config_command(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Init => {
            if config_path.exists() {
                println!(
                    "Configuration file already exists: {}",
                    config_path.display()
                );
                return Ok(());
            }

            // Init is the one place the parent directory is created for the
            // caller; plain write_config requires it to exist.
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
                    path: config_path.to_path_buf(),
                    source: e,
                })?;
            }

            let manager = ConfigManager::new(config_path, true)?;
            manager.write_config()?;
            println!("Created configuration file: {}", config_path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config = config::read_config(config_path)?;
            let rendered = serde_json::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            println!("{rendered}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
