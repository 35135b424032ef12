//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Render password fields as bullets
    pub mask_passwords: Option<bool>,
    /// Replace passwords in the submission log
    pub redact_passwords_in_log: Option<bool>,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

/// Result of loading the config at startup
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: TuiConfig,
    /// Set when the file existed but could not be used, or defaults could not be written
    pub warning: Option<anyhow::Error>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "registration-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("writing config file {}", path.display()))?;
        Ok(())
    }

    /// Startup load: defaults are written on first run, a bad file falls back to defaults
    pub fn load_or_init_at(path: &Path) -> LoadedConfig {
        if !path.exists() {
            let config = Self::default();
            let warning = config.save_to(path).err();
            return LoadedConfig { config, warning };
        }

        match Self::load_from(path) {
            Ok(config) => LoadedConfig {
                config,
                warning: None,
            },
            Err(err) => LoadedConfig {
                config: Self::default(),
                warning: Some(err),
            },
        }
    }

    /// [`Self::load_or_init_at`] against the user config directory
    pub fn load_or_init() -> LoadedConfig {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => LoadedConfig {
                config: Self::default(),
                warning: None,
            },
        }
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(true)
    }

    pub fn redact_passwords_in_log(&self) -> bool {
        self.redact_passwords_in_log.unwrap_or(true)
    }

    /// Configured log file, or the default under the data directory
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("registration-tui.log"))
        })
    }
}
