//! Configuration for the folio hero.
//!
//! Settings live in `config.toml` inside the platform config directory.
//! A missing file means defaults; unknown keys are ignored and missing keys
//! take their default value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use folio_background::BackgroundSettings;
use folio_core::LayoutMode;
use folio_fonts::{FontFamily, Palette};
use folio_motion::{SpringConfig, TrackerConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Name shown when none is configured.
pub const DEFAULT_NAME: &str = "Vemula Moksha";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name in the hero.
    pub name: String,
    pub layout: LayoutMode,
    /// Frame loop rate.
    pub fps: u32,
    /// Time between font changes in milliseconds.
    pub font_interval_ms: u64,
    /// Clamp pointer offsets to the hero bounds.
    pub clamp_to_bounds: bool,
    /// Width of a terminal column in pixels.
    pub cell_px: f32,
    /// Fonts to draw from; empty means all of them.
    pub fonts: Vec<FontFamily>,
    pub spring: SpringConfig,
    /// Decorative layers.
    pub background: BackgroundSettings,
}

impl Default for Config {
    fn default() -> Self {
        let tracker = TrackerConfig::default();
        Self {
            name: DEFAULT_NAME.to_string(),
            layout: LayoutMode::default(),
            fps: 60,
            font_interval_ms: 300,
            clamp_to_bounds: tracker.clamp_to_bounds,
            cell_px: tracker.cell_px,
            fonts: Vec::new(),
            spring: tracker.spring,
            background: BackgroundSettings::default(),
        }
    }
}

impl Config {
    /// Platform directories for the application.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "folio")
    }

    /// Default config file location.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Directory for log files, if the platform has one.
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, returning defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            spring: self.spring.sanitized(),
            clamp_to_bounds: self.clamp_to_bounds,
            cell_px: self.cell_px,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.fonts.iter().copied())
    }

    /// Font interval, never shorter than 16ms.
    pub fn font_interval(&self) -> Duration {
        Duration::from_millis(self.font_interval_ms.max(16))
    }
}
