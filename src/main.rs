//! hanoi-peg - Main entry point
//!
//! Prints a peg picture or validates a tower configuration file. Moving
//! disks between pegs is left to whatever game drives the library.

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use hanoi_peg::cli::{Cli, Commands};
use hanoi_peg::TowerConfig;

/// Initialize the logger with appropriate settings
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // Allows RUST_LOG env var to override
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!(?cli, "CLI arguments parsed");

    match cli.command {
        Commands::Show {
            difficulty,
            empty,
            rule,
            config,
        } => {
            let settings = match config {
                Some(path) => {
                    info!("Loading tower configuration: {:?}", path);
                    let settings = TowerConfig::load_from_file(&path)
                        .with_context(|| format!("Failed to load configuration from {:?}", path))?;
                    settings.validate().context("Invalid tower configuration")?;
                    settings
                }
                None => TowerConfig {
                    difficulty,
                    stacking_rule: rule,
                    start_peg: !empty,
                },
            };

            let tower = settings.build().context("Failed to build tower")?;
            print!("{}", tower.render());
        }
        Commands::Validate { config } => {
            info!("Validating configuration file: {:?}", config);
            let result = TowerConfig::load_from_file(&config)
                .with_context(|| format!("Failed to load configuration from {:?}", config))
                .and_then(|settings| {
                    settings.validate()?;
                    Ok(settings)
                });
            match result {
                Ok(settings) => {
                    info!("Configuration validation successful");
                    println!("✓ Configuration file is valid: {:?}", settings);
                }
                Err(e) => {
                    error!("Configuration validation failed: {:#}", e);
                    eprintln!("✗ Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
