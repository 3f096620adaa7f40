use crate::physics::chase::ChaseCameraConfig;
use crate::physics::flight::FlightTuning;
use crate::resources::LightingConfig;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `SKYSHIP__FLIGHT__MAX_SPEED=60`.
pub const ENV_PREFIX: &str = "SKYSHIP";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    Parse(String),
    Serialize(toml::ser::Error),
    Write(std::io::Error),
    NoConfigDirectory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => {
                write!(f, "configuration file not found: {}", path.display())
            }
            ConfigError::Parse(msg) => write!(f, "could not parse configuration: {msg}"),
            ConfigError::Serialize(e) => write!(f, "could not serialize configuration: {e}"),
            ConfigError::Write(e) => write!(f, "could not write configuration: {e}"),
            ConfigError::NoConfigDirectory => write!(f, "no user configuration directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(e: config::ConfigError) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub flight: FlightTuning,
    pub body: BodyConfig,
    pub camera: ChaseCameraConfig,
    pub lighting: LightingConfig,
    pub input: InputConfig,
}

/// Rigid-body settings for the ship.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Physics tick rate.
    pub fixed_hz: f64,
    pub spawn_position: [f32; 3],
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            linear_damping: 0.5,
            angular_damping: 2.0,
            fixed_hz: 50.0,
            spawn_position: [0.0, 20.0, 0.0],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Multiplier from raw mouse motion to look delta.
    pub look_scale: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { look_scale: 0.1 }
    }
}

impl GameConfig {
    /// Default location of the user configuration file, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "skyship", "Skyship")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Layers an optional TOML file and `SKYSHIP__*` environment variables over the defaults.
    ///
    /// A file that is named but missing is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        let path = if path.exists() {
            Some(path)
        } else {
            info!("Config file {} not found. Using defaults.", path.display());
            None
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                warn!("{}. Using defaults.", ConfigError::NoConfigDirectory);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save configuration to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    pub fn save_to_user_config(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::user_config_path().ok_or(ConfigError::NoConfigDirectory)?;
        self.save(&path)?;
        Ok(path)
    }
}
