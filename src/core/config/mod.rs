//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The site config is searched in order, first hit wins:
//! 1. `--config <path>` (must exist)
//! 2. `$REPAIRSITE_CONFIG` if set (warns and continues if missing)
//! 3. `<project>/repairsite.toml`
//! 4. Built-in defaults
//!
//! # Example
//!
//! ```no_run
//! use repairsite::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(None, Path::new("/path/to/site")).unwrap();
//! for warning in &result.warnings {
//!     eprintln!("warning: {}", warning.message);
//! }
//! println!("Title: {}", result.config.site.metadata.title);
//! ```

pub mod schema;

pub use schema::{Integrations, SiteConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "REPAIRSITE_CONFIG";

/// Config file name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "repairsite.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file '{0}' already exists")]
    AlreadyExists(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded site configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The site definition with defaults applied.
    pub site: SiteConfig,
    /// Path of the file it was read from, `None` for built-in defaults.
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if a config file
    /// exists but cannot be parsed or fails validation.
    pub fn load(explicit: Option<&Path>, project_dir: &Path) -> Result<ConfigLoadResult, ConfigError> {
        Self::load_with(explicit, project_dir, |key| std::env::var(key).ok())
    }

    /// Load configuration, reading environment variables through `lookup`.
    pub fn load_with<F>(
        explicit: Option<&Path>,
        project_dir: &Path,
        lookup: F,
    ) -> Result<ConfigLoadResult, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let path = Self::locate(explicit, project_dir, &lookup, &mut warnings)?;
        let site = match &path {
            Some(path) => Self::read_site_config(path)?,
            None => SiteConfig::default(),
        };

        site.validate()?;

        Ok(ConfigLoadResult {
            config: Config { site, path },
            warnings,
        })
    }

    /// Find the config file to use, if any.
    fn locate<F>(
        explicit: Option<&Path>,
        project_dir: &Path,
        lookup: &F,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<Option<PathBuf>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1. --config
        if let Some(path) = explicit {
            let path = Self::resolve(project_dir, path);
            if !path.exists() {
                return Err(ConfigError::ReadError {
                    path,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            return Ok(Some(path));
        }

        // 2. $REPAIRSITE_CONFIG
        if let Some(value) = lookup(CONFIG_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            let path = Self::resolve(project_dir, Path::new(&value));
            if path.exists() {
                return Ok(Some(path));
            }
            warnings.push(ConfigWarning {
                message: format!("{} points to a missing file, ignoring it", CONFIG_ENV_VAR),
                path,
            });
        }

        // 3. <project>/repairsite.toml
        let project = Self::project_config_path(project_dir);
        if project.exists() {
            return Ok(Some(project));
        }

        Ok(None)
    }

    fn resolve(project_dir: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_dir.join(path)
        }
    }

    /// Read and parse a site config file.
    fn read_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical config path for a project directory.
    ///
    /// Returns `<project>/repairsite.toml`.
    pub fn project_config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Write `site` to `path` atomically.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn write(path: &Path, site: &SiteConfig, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        Self::write_config_atomic(path, site)
    }

    /// Write a config file atomically.
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Temp file in the same directory so the rename stays on one filesystem
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
