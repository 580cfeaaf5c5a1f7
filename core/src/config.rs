//! Layered configuration loader.
//!
//! Precedence, later layers win:
//! 1. Defaults
//! 2. File config (`<home>/config.toml`)
//! 3. Environment overrides (`RESAN_*` variables)
//!
//! CLI flags are applied on top by the binary.
//!
//! ## Example
//!
//! ```no_run
//! use resan_core::config::ConfigLoader;
//! use std::path::PathBuf;
//!
//! let config = ConfigLoader::new()
//!     .with_home(PathBuf::from("/tmp/resan"))
//!     .load()?;
//! # Ok::<(), resan_core::config::ConfigError>(())
//! ```

use std::env;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

/// Name of the per-user directory under `$HOME`.
pub const DEFAULT_HOME_DIR: &str = ".biblioteksresan";

pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_ENV_PREFIX: &str = "RESAN";

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error loading config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for ${var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },

    #[error("cannot determine home directory")]
    NoHomeDir,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResanConfig {
    /// Directory that holds `config.toml` and, by default, the log directory.
    pub home: PathBuf,

    /// Where exported PDFs are written.
    pub export_dir: PathBuf,

    /// Where the log file is written.
    pub log_dir: PathBuf,

    /// Initial identity label for new sessions.
    pub school_name: Option<String>,
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    pub export_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub school_name: Option<String>,
}

impl ConfigToml {
    /// Overlay `other` on top of `self`, preferring values set in `other`.
    fn merge(&mut self, other: ConfigToml) {
        if other.export_dir.is_some() {
            self.export_dir = other.export_dir;
        }
        if other.log_dir.is_some() {
            self.log_dir = other.log_dir;
        }
        if other.school_name.is_some() {
            self.school_name = other.school_name;
        }
    }
}

/// Builder for layered configuration loading.
pub struct ConfigLoader {
    home: Option<PathBuf>,
    env_prefix: String,
    skip_file: bool,
    skip_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// All layers enabled, home auto-detected, environment prefix `RESAN`.
    pub fn new() -> Self {
        Self {
            home: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            skip_file: false,
            skip_env: false,
        }
    }

    /// Set the home directory explicitly instead of `$RESAN_HOME` or
    /// `~/.biblioteksresan`.
    pub fn with_home(mut self, path: PathBuf) -> Self {
        self.home = Some(path);
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip reading `config.toml` (only defaults + env).
    pub fn skip_file_layer(mut self) -> Self {
        self.skip_file = true;
        self
    }

    /// Skip environment overrides (only defaults + file).
    pub fn skip_env_layer(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load configuration with all enabled layers.
    ///
    /// A missing `config.toml` is not an error; an unreadable or malformed
    /// one is.
    pub fn load(self) -> Result<ResanConfig, ConfigError> {
        let home = self.resolve_home()?;

        let mut layered = ConfigToml::default();
        if !self.skip_file {
            layered.merge(load_config_file(&home)?);
        }
        if !self.skip_env {
            layered.merge(env_overrides(&self.env_prefix)?);
        }

        let export_dir = match layered.export_dir {
            Some(dir) => dir,
            None => env::current_dir().map_err(|source| ConfigError::Io {
                path: PathBuf::from("."),
                source,
            })?,
        };
        let log_dir = layered.log_dir.unwrap_or_else(|| home.join("log"));

        Ok(ResanConfig {
            home,
            export_dir,
            log_dir,
            school_name: layered.school_name,
        })
    }

    /// Priority: explicit home, `$<PREFIX>_HOME`, `~/.biblioteksresan`.
    fn resolve_home(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.home {
            return Ok(path.clone());
        }
        if !self.skip_env
            && let Some(path) = env::var_os(format!("{}_HOME", self.env_prefix))
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_HOME_DIR))
            .ok_or(ConfigError::NoHomeDir)
    }
}

/// Read `<home>/config.toml`. Returns an empty layer when the file does not
/// exist.
pub fn load_config_file(home: &Path) -> Result<ConfigToml, ConfigError> {
    let path = home.join(CONFIG_FILE_NAME);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("config.toml not found at {}, using defaults", path.display());
            return Ok(ConfigToml::default());
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Toml { path, source })
}

fn env_overrides(prefix: &str) -> Result<ConfigToml, ConfigError> {
    Ok(ConfigToml {
        export_dir: env_path(&format!("{prefix}_EXPORT_DIR"))?,
        log_dir: env_path(&format!("{prefix}_LOG_DIR"))?,
        school_name: env_string(&format!("{prefix}_SCHOOL_NAME"))?,
    })
}

fn env_path(var: &str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var_os(var) {
        Some(value) if value.is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "path must not be empty".to_string(),
        }),
        Some(value) => Ok(Some(PathBuf::from(value))),
        None => Ok(None),
    }
}

fn env_string(var: &str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid UTF-8".to_string(),
        }),
    }
}
