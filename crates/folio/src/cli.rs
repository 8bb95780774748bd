//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use folio_config::{Config, ConfigError};
use folio_core::LayoutMode;
use tracing::warn;

/// A pointer-reactive portfolio hero for the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name to display
    #[arg(short, long)]
    pub name: Option<String>,

    /// Name layout: normal or split
    #[arg(short, long)]
    pub layout: Option<LayoutMode>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Frame loop rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Time between font changes in milliseconds
    #[arg(long)]
    pub font_interval_ms: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Save the effective configuration to the config file and exit
    #[arg(long, default_value_t = false, conflicts_with = "print_config")]
    pub write_config: bool,
}

impl Cli {
    /// Load the config file and apply the command line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => match Config::load() {
                Err(ConfigError::NoConfigDir) => {
                    warn!("no config directory, using defaults");
                    Config::default()
                }
                other => other?,
            },
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// The file `--config` names, or the default location.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }

    /// Save `config` to [`Cli::config_path`] and return where it went.
    pub fn save_config(&self, config: &Config) -> Result<PathBuf, ConfigError> {
        let path = self.config_path()?;
        config.save_to(&path)?;
        Ok(path)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.name.clone_from(name);
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(ms) = self.font_interval_ms {
            config.font_interval_ms = ms;
        }
    }
}
