//! Configuration loading
//!
//! Reads `~/.config/askterm/config.toml`. A missing file is not an error; an
//! unreadable or invalid one yields defaults plus a warning for the UI.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

mod types;

pub use types::{Config, DEFAULT_BASE_URL, ServiceConfig};

use crate::error::AppError;

const CONFIG_DIR: &str = "askterm";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any problem found while loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load from an explicit path, falling back to defaults on any error
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// `Ok(None)` when the file does not exist
fn read_config(path: &Path) -> Result<Option<Config>, AppError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::Io(e)),
    };

    let config = toml::from_str(&contents).map_err(|e| AppError::Config {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })?;
    Ok(Some(config))
}
