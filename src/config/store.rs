//! Loading and saving the config file
//!
//! The file lives at `~/.dockpick/config.json` unless another path is given.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::Config;
use crate::error::{DockpickError, Result};

/// Directory under the home directory holding dockpick state
pub const CONFIG_DIR: &str = ".dockpick";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.json";

/// Reads and writes a [`Config`] at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Store at the default per-user path
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.dockpick/config.json`, relative to the working directory when
    /// there is no home directory
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config; a missing file yields an empty config
    pub fn load(&self) -> Result<Config> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, starting empty", self.path.display());
                return Ok(Config::new());
            }
            Err(e) => return Err(DockpickError::IoError(e)),
        };

        serde_json::from_str(&content).map_err(|source| DockpickError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the config, tab-indented, replacing the file atomically
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut content, PrettyFormatter::with_indent(b"\t"));
        config.serialize(&mut serializer)?;

        let temp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(&content)?;
            file.flush()?;
        }
        fs::rename(&temp_path, &self.path)?;

        debug!("saved config to {}", self.path.display());
        Ok(())
    }
}
