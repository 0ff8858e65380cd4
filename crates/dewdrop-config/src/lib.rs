//! Configuration file loading for dewdrop.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/dewdrop/config.toml`). Every key is optional; missing
//! keys fall back to defaults and out-of-range values are clamped.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use dewdrop_core::{DropSize, Theme};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DEWDROP_CONFIG";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

/// Errors raised while locating or reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active seasonal theme.
    pub theme: Theme,
    /// Whether the liquid drop overlay is shown at startup.
    pub show_drop: bool,
    /// Drop edge length in pixels.
    pub drop_size: DropSize,
    /// Target frame rate.
    pub fps: u32,
    /// Width of one terminal cell in pixels.
    pub cell_width: u16,
    /// Height of one terminal cell in pixels.
    pub cell_height: u16,
    /// Paint the theme backdrop color behind the particles.
    pub paint_backdrop: bool,
    /// Write logs to this file. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_drop: false,
            drop_size: DropSize::default(),
            fps: 60,
            cell_width: 8,
            cell_height: 16,
            paint_backdrop: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "dewdrop")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Pick the config file: `explicit`, then `$DEWDROP_CONFIG`, then the
    /// platform default.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Self::default_path(),
        }
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(text).map(Config::sanitized)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults on any error.
    ///
    /// The error, if any, is returned alongside so the caller can report it
    /// once logging is set up.
    pub fn load(explicit: Option<&Path>) -> (Self, Option<ConfigError>) {
        match Self::resolve_path(explicit).and_then(|path| Self::load_from(&path)) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Clamp values into their valid ranges.
    fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        self.cell_width = self.cell_width.max(1);
        self.cell_height = self.cell_height.max(1);
        self
    }

    /// Render as TOML, e.g. to seed a new config file.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Wall-clock budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.clamp(MIN_FPS, MAX_FPS)
    }
}
