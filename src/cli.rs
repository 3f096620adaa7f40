//! Command line interface for Skyship

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

use crate::config::{ConfigError, GameConfig};

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(ConfigError),
    /// Overrides produced an unusable configuration
    InvalidOverride(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(e) => write!(f, "Failed to load configuration: {e}"),
            CliError::InvalidOverride(msg) => write!(f, "Invalid override: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::ConfigLoad(e)
    }
}

fn long_version() -> &'static str {
    concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
}

/// Skyship - fly a spaceship over a small town
#[derive(Parser, Debug, Default)]
#[command(version, long_version = long_version(), about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum ship speed (overrides config file)
    #[arg(long, value_name = "SPEED")]
    pub max_speed: Option<f32>,

    /// Mouse look sensitivity (overrides config file)
    #[arg(long, value_name = "VALUE")]
    pub sensitivity: Option<f32>,

    /// Lowest allowed altitude (overrides config file)
    #[arg(long, value_name = "Y")]
    pub min_altitude: Option<f32>,

    /// Highest allowed altitude (overrides config file)
    #[arg(long, value_name = "Y")]
    pub max_altitude: Option<f32>,

    /// Start with the night lighting preset
    #[arg(short = 'n', long)]
    pub night: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the resolved configuration to the user config file and exit
    #[arg(long)]
    pub save_config: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<GameConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            println!("Loading configuration from: {}", path.display());
            GameConfig::load(Some(path))?
        }
        None => GameConfig::load_from_user_config(),
    };

    apply_overrides(args, &mut config)?;
    Ok(config)
}

pub fn apply_overrides(args: &Args, config: &mut GameConfig) -> Result<(), CliError> {
    if let Some(max_speed) = args.max_speed {
        if max_speed <= 0.0 {
            return Err(CliError::InvalidOverride(format!(
                "max speed must be positive, got {max_speed}"
            )));
        }
        println!("Overriding max speed to: {max_speed}");
        config.flight.max_speed = max_speed;
    }

    if let Some(sensitivity) = args.sensitivity {
        println!("Overriding look sensitivity to: {sensitivity}");
        config.flight.look_sensitivity = sensitivity;
    }

    if let Some(min_altitude) = args.min_altitude {
        config.flight.min_altitude = min_altitude;
    }

    if let Some(max_altitude) = args.max_altitude {
        config.flight.max_altitude = max_altitude;
    }

    if config.flight.min_altitude > config.flight.max_altitude {
        return Err(CliError::InvalidOverride(format!(
            "min altitude {} is above max altitude {}",
            config.flight.min_altitude, config.flight.max_altitude
        )));
    }

    if args.night {
        config.lighting.start_at_night = true;
    }

    Ok(())
}
