//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wasteland/wasteland.toml`
//! 3. Local config: `./wasteland.toml` or the file given with `--config`
//! 4. Environment variables: `WASTELAND_*` prefix
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Name of the local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wasteland.toml";

/// Unified configuration for wasteland.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Network input file (default: input/input.txt)
    pub input: PathBuf,
    /// Start node of the single walk
    pub start: String,
    /// Target pattern of the single walk
    pub target: String,
    /// Pattern selecting the ghost walkers
    pub ghost_start: String,
    /// Pattern every ghost has to sit on at once
    pub ghost_target: String,
    /// Progress estimate for the lockstep walk (default: the LCM answer)
    pub expected_jumps: Option<u64>,
    /// Minimum time between progress lines
    pub progress_interval_ms: u64,
    /// Abort walks after this many jumps (default: unbounded)
    pub max_jumps: Option<u64>,
    /// Include the lockstep walk in `run`
    pub naive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input/input.txt"),
            start: "AAA".into(),
            target: "^ZZZ$".into(),
            ghost_start: ".*A$".into(),
            ghost_target: ".*Z$".into(),
            expected_jumps: None,
            progress_interval_ms: 1000,
            max_jumps: None,
            naive: true,
        }
    }
}

/// Raw settings for intermediate parsing (every field optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub input: Option<PathBuf>,
    pub start: Option<String>,
    pub target: Option<String>,
    pub ghost_start: Option<String>,
    pub ghost_target: Option<String>,
    pub expected_jumps: Option<u64>,
    pub progress_interval_ms: Option<u64>,
    pub max_jumps: Option<u64>,
    pub naive: Option<bool>,
}

/// Get the XDG config directory for wasteland.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wasteland").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wasteland.toml"))
}

/// Get the path to the local config file in the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.input = expand_path(&self.input);
    }

    /// Merge overlay config onto self (base): overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input: overlay.input.clone().unwrap_or_else(|| self.input.clone()),
            start: overlay.start.clone().unwrap_or_else(|| self.start.clone()),
            target: overlay.target.clone().unwrap_or_else(|| self.target.clone()),
            ghost_start: overlay
                .ghost_start
                .clone()
                .unwrap_or_else(|| self.ghost_start.clone()),
            ghost_target: overlay
                .ghost_target
                .clone()
                .unwrap_or_else(|| self.ghost_target.clone()),
            expected_jumps: overlay.expected_jumps.or(self.expected_jumps),
            progress_interval_ms: overlay
                .progress_interval_ms
                .unwrap_or(self.progress_interval_ms),
            max_jumps: overlay.max_jumps.or(self.max_jumps),
            naive: overlay.naive.unwrap_or(self.naive),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit local config; must exist. Without it
    ///   `./wasteland.toml` is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        current = current.merge_local(config_file)?;

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        Ok(current)
    }

    /// Load defaults plus one config file, skipping the global file and environment.
    ///
    /// Gives a reproducible view of a single file, independent of the user's
    /// global config and shell; the integration tests rely on it.
    pub fn load_file(path: &Path) -> Result<Self, ApplicationError> {
        let mut settings = Self::default().merge_local(Some(path))?;
        settings.expand_paths();
        Ok(settings)
    }

    fn merge_local(self, config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        match config_file {
            Some(path) if !path.exists() => Err(ApplicationError::Config {
                message: format!("config file not found: {}", path.display()),
            }),
            Some(path) => Ok(self.merge_with(&load_raw_settings(path)?)),
            None => {
                let local_path = local_config_path();
                if local_path.exists() {
                    Ok(self.merge_with(&load_raw_settings(&local_path)?))
                } else {
                    Ok(self)
                }
            }
        }
    }

    /// Apply WASTELAND_* environment variables as explicit overrides.
    ///
    /// `WASTELAND_MAX_JUMPS=500` sets `max_jumps`. A value that does not parse
    /// into the field's type is a config error, not a silent default.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("WASTELAND")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<String>(&config, "input")? {
            settings.input = PathBuf::from(val);
        }
        if let Some(val) = env_value(&config, "start")? {
            settings.start = val;
        }
        if let Some(val) = env_value(&config, "target")? {
            settings.target = val;
        }
        if let Some(val) = env_value(&config, "ghost_start")? {
            settings.ghost_start = val;
        }
        if let Some(val) = env_value(&config, "ghost_target")? {
            settings.ghost_target = val;
        }
        if let Some(val) = env_value(&config, "expected_jumps")? {
            settings.expected_jumps = Some(val);
        }
        if let Some(val) = env_value(&config, "progress_interval_ms")? {
            settings.progress_interval_ms = val;
        }
        if let Some(val) = env_value(&config, "max_jumps")? {
            settings.max_jumps = Some(val);
        }
        if let Some(val) = env_value(&config, "naive")? {
            settings.naive = val;
        }

        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

/// Typed lookup of one environment key; `None` when the variable is unset.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("WASTELAND_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
