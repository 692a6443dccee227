//! banksplit - split gravitational-wave template banks into sub-banks.
//!
//! A template bank is binned by effective spin, each bin is sorted by a
//! chosen column and cut into overlapping sub-banks of near-equal size, and
//! every sub-bank is annotated with an approximant, an upper frequency
//! cutoff and a duration estimate before it is written out alongside a
//! cache manifest.

#![warn(missing_docs)]

pub mod annotate;
pub mod bank;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod physics;
pub mod pipeline;
pub mod split;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, SplitArgs};
use config::{
    Config, build_split_config, load_config_file, resolve_config_path, save_config,
    validate_config,
};
use pipeline::{process_bank, single_input};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the banksplit CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.split.verbose, cli.split.quiet);

    let config_path = resolve_config_path(cli.split.config.as_deref())?;

    if let Some(command) = cli.command {
        return handle_command(command, &config_path);
    }

    let config = load_config_file(&config_path)?;
    validate_config(&config)?;
    debug!("Using configuration file: {}", config_path.display());

    split_bank(&cli.inputs, &cli.split, &config)
}

/// Split the single input bank with the given options.
fn split_bank(inputs: &[PathBuf], args: &SplitArgs, config: &Config) -> Result<()> {
    let input = single_input(inputs)?;
    let split_config = build_split_config(args, config)?;
    let progress_enabled = !args.quiet && !args.no_progress;

    process_bank(input, &split_config, progress_enabled)?;
    Ok(())
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

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: Command, config_path: &Path) -> Result<()> {
    match command {
        Command::Config { action } => match action {
            ConfigAction::Init => {
                if config_path.exists() {
                    println!("Configuration file already exists: {}", config_path.display());
                } else {
                    save_config(&Config::default(), config_path)?;
                    println!("Created configuration file: {}", config_path.display());
                    println!("\nNext steps:");
                    println!("  set templates_per_bank, sort_by, instrument and f_low under [defaults]");
                    println!("  add [[approximants]] entries with min, max and approximant");
                }
                Ok(())
            }
            ConfigAction::Show => {
                let config = load_config_file(config_path)?;
                println!("{config:#?}");
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
        },
    }
}
