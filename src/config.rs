use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides where persisted day overrides and todo progress live.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Config {
    pub fn load() -> io::Result<Self> {
        let path = get_config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        } else {
            Ok(Config::default())
        }
    }

    pub fn init() -> io::Result<bool> {
        let path = get_config_path();
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, "")?;
        Ok(true)
    }

    pub fn get_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => resolve_path(dir),
            None => get_config_dir().join("data"),
        }
    }

    /// Namespace for admin content overrides.
    pub fn overrides_dir(&self) -> PathBuf {
        self.get_data_dir().join("days")
    }

    /// Namespace for per-day todo completion, independent of overrides.
    pub fn progress_dir(&self) -> PathBuf {
        self.get_data_dir().join("progress")
    }
}

/// Resolve a path to absolute, joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("adventide")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}
