//! Configuration loading traits and types.
//!
//! Every MeloD configuration file is a TOML document read into a
//! [`ConfigStore`]. The [`PathConfig`] trait gives each config kind the same
//! load and resolve behaviour; the kinds themselves only add fixed-path
//! accessors.
//!
//! # Usage
//!
//! ```rust,no_run
//! use melod_common::config::PathConfig;
//! use melod_common::project::ProjectConfig;
//!
//! let mut project = ProjectConfig::new();
//! if !project.load("config/project.toml") {
//!     std::process::exit(1);
//! }
//! let (x, y, z) = project.printer_dimensions().unwrap();
//! println!("{x} x {y} x {z}");
//! ```

use crate::store::{ConfigStore, ResolveError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};
use tracing::{debug, error};

/// One value per printer axis, in x, y, z order.
pub type AxisTriple<T> = (T, T, T);

/// Error type for configuration loading operations.
///
/// [`PathConfig::load`] logs these and collapses them into `false`;
/// [`PathConfig::try_load`] returns them.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No file path was given.
    #[error("A config filepath is required in order to load its information")]
    MissingPath,

    /// Configuration file not found at specified path.
    #[error("The config file could not be found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// TOML parsing failed.
    #[error("The config file could not be loaded due to a format error, check the file format and try again: {0}")]
    ParseError(String),

    /// Any other I/O failure while reading the file.
    #[error("Something went wrong while reading the config file: {0}")]
    Io(String),
}

/// Read the TOML file at `path` into a table.
///
/// The path is made absolute against the working directory first; the
/// absolute path is returned alongside the table.
///
/// # Errors
///
/// - `ConfigError::MissingPath` if `path` is empty
/// - `ConfigError::FileNotFound` if the file does not exist
/// - `ConfigError::ParseError` if TOML syntax is invalid
/// - `ConfigError::Io` for every other read failure
pub fn read_table(path: &Path) -> Result<(PathBuf, Table), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::MissingPath);
    }

    let full_path = std::path::absolute(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let content = std::fs::read_to_string(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(full_path.clone())
        } else {
            ConfigError::Io(e.to_string())
        }
    })?;

    let table = toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    Ok((full_path, table))
}

/// Shared load and resolve behaviour over a [`ConfigStore`].
///
/// Implementors only provide access to their store and a name for logs.
pub trait PathConfig {
    /// Config kind, used in diagnostics.
    const KIND: &'static str;

    /// The underlying store.
    fn store(&self) -> &ConfigStore;

    /// The underlying store, for loading.
    fn store_mut(&mut self) -> &mut ConfigStore;

    /// Load `path`, keeping the failure kind.
    fn try_load(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.store_mut().try_load(path.as_ref())
    }

    /// Load `path`, reporting only success or failure.
    ///
    /// Failures are logged at error level and leave the current document in
    /// place.
    fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => {
                debug!(kind = Self::KIND, path = %path.display(), "Config loaded");
                true
            }
            Err(e) => {
                error!(kind = Self::KIND, path = %path.display(), "{e}");
                false
            }
        }
    }

    /// Whether a load has succeeded.
    fn is_loaded(&self) -> bool {
        self.store().is_loaded()
    }

    /// Resolve an arbitrary data path with the default separator.
    fn value(&self, data_path: &str) -> Result<&Value, ResolveError> {
        self.store().resolve(data_path)
    }

    /// Resolve an arbitrary data path with a custom separator.
    fn value_with(&self, data_path: &str, separator: &str) -> Result<&Value, ResolveError> {
        self.store().resolve_with(data_path, separator)
    }
}
