use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub mod game;
pub mod log;

pub use game::GameConfig;
pub use log::LogConfig;

pub static DEFAULT_CONFIG: &[u8] = include_bytes!("../../default_config/lottery.toml");

const CONFIG_PATH: &str = "config/lottery.toml";

pub fn default_config_path() -> &'static Path {
    Path::new(CONFIG_PATH)
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub log: LogConfig,
}

impl Config {
    /// Reads the config at `path`. A missing file yields the bundled
    /// defaults; nothing is written back.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Self::bundled();
        }

        let file = fs::read(path).map_err(ConfigError::Read)?;
        Ok(toml::from_slice(&file)?)
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Ok(toml::from_slice(DEFAULT_CONFIG)?)
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
