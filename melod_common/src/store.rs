//! Hierarchical configuration store and data-path resolver.
//!
//! A [`ConfigStore`] holds one parsed TOML document. Values are located with a
//! directory-like *data path*: `"printer/x_dim"` walks into the `printer` table
//! and returns its `x_dim` entry.
//!
//! # Resolution rules
//!
//! - An empty data path (or an empty separator) is [`ResolveError::InvalidPath`].
//! - A missing key, or a segment that tries to descend into a scalar or an
//!   array, is [`ResolveError::NotFound`] carrying the full original path.
//! - Empty segments (`"printer//x_dim"`, `"printer/"`) are looked up as the
//!   key `""` and normally end up as [`ResolveError::NotFound`].
//! - The located value is returned untouched. The `resolve_*` narrowing
//!   helpers check its shape but never convert between shapes.

use crate::config::{AxisTriple, ConfigError, read_table};
use crate::consts::DEFAULT_SEPARATOR;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};

/// Error type for data-path resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// The data path (or its separator) is empty.
    #[error("The data path for the loaded config is not valid")]
    InvalidPath,

    /// A segment of the path does not exist or cannot be descended into.
    #[error("The config value searched at {path} does not exist")]
    NotFound { path: String },

    /// No configuration file has been loaded into the store yet.
    #[error("No configuration has been loaded")]
    NotLoaded,

    /// The value exists but does not have the shape the caller asked for.
    #[error("The config value at {path} is a {found}, expected {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A data path split on a separator.
///
/// Borrowed from the caller and only alive for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPath<'a> {
    raw: &'a str,
    separator: &'a str,
}

impl<'a> DataPath<'a> {
    /// Parse `raw` using `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPath`] if either string is empty.
    pub fn parse(raw: &'a str, separator: &'a str) -> Result<Self, ResolveError> {
        if raw.is_empty() || separator.is_empty() {
            return Err(ResolveError::InvalidPath);
        }
        Ok(Self { raw, separator })
    }

    /// The path exactly as the caller passed it.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Segments in root-to-leaf order. Never empty.
    pub fn segments(&self) -> std::str::Split<'a, &'a str> {
        self.raw.split(self.separator)
    }
}

impl fmt::Display for DataPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Raw numeric config value: whichever of integer or float the file holds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One loaded configuration document.
///
/// Empty until [`ConfigStore::try_load`] succeeds; every later successful
/// load replaces the whole document. Failed loads leave it untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    data: Option<Table>,
    source: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an empty, unloaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an already parsed table.
    pub fn from_table(table: Table) -> Self {
        Self {
            data: Some(table),
            source: None,
        }
    }

    /// Read and parse `path`, replacing the stored document on success.
    ///
    /// # Errors
    ///
    /// See [`read_table`]. On error the current document is kept.
    pub fn try_load(&mut self, path: &Path) -> Result<(), ConfigError> {
        let (source, table) = read_table(path)?;
        self.data = Some(table);
        self.source = Some(source);
        Ok(())
    }

    /// Whether a document has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Absolute path of the file the current document was read from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The whole document, if loaded.
    pub fn table(&self) -> Option<&Table> {
        self.data.as_ref()
    }

    /// Resolve `path` using the default `/` separator.
    pub fn resolve(&self, path: &str) -> Result<&Value, ResolveError> {
        self.resolve_with(path, DEFAULT_SEPARATOR)
    }

    /// Resolve `path`, splitting it on `separator`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidPath`] for an empty path or separator
    /// - [`ResolveError::NotLoaded`] before the first successful load
    /// - [`ResolveError::NotFound`] when any segment is missing or a dead end
    pub fn resolve_with(&self, path: &str, separator: &str) -> Result<&Value, ResolveError> {
        let data_path = DataPath::parse(path, separator)?;
        let root = self.data.as_ref().ok_or(ResolveError::NotLoaded)?;

        let not_found = || ResolveError::NotFound {
            path: data_path.as_str().to_string(),
        };

        let mut segments = data_path.segments();
        let first = segments.next().ok_or_else(not_found)?;
        let start = root.get(first).ok_or_else(not_found)?;

        // Scalars and arrays are dead ends, same as a missing key.
        segments.try_fold(start, |value, segment| {
            value
                .as_table()
                .and_then(|table| table.get(segment))
                .ok_or_else(not_found)
        })
    }

    /// Resolve a string value.
    pub fn resolve_str(&self, path: &str) -> Result<&str, ResolveError> {
        self.narrow(path, "string", Value::as_str)
    }

    /// Resolve a float value. Integers are rejected, not widened.
    pub fn resolve_float(&self, path: &str) -> Result<f64, ResolveError> {
        self.narrow(path, "float", Value::as_float)
    }

    /// Resolve an integer value.
    pub fn resolve_integer(&self, path: &str) -> Result<i64, ResolveError> {
        self.narrow(path, "integer", Value::as_integer)
    }

    /// Resolve a value that may be stored as either integer or float.
    pub fn resolve_number(&self, path: &str) -> Result<Number, ResolveError> {
        self.narrow(path, "integer or float", |value| match value {
            Value::Integer(v) => Some(Number::Integer(*v)),
            Value::Float(v) => Some(Number::Float(*v)),
            _ => None,
        })
    }

    /// Resolve one value per axis, in x, y, z order.
    pub(crate) fn resolve_axes<'s, T>(
        &'s self,
        paths: [&str; 3],
        narrow: impl Fn(&'s Self, &str) -> Result<T, ResolveError>,
    ) -> Result<AxisTriple<T>, ResolveError> {
        let [x, y, z] = paths;
        Ok((narrow(self, x)?, narrow(self, y)?, narrow(self, z)?))
    }

    fn narrow<'s, T>(
        &'s self,
        path: &str,
        expected: &'static str,
        pick: impl FnOnce(&'s Value) -> Option<T>,
    ) -> Result<T, ResolveError> {
        let value = self.resolve(path)?;
        pick(value).ok_or_else(|| ResolveError::UnexpectedType {
            path: path.to_string(),
            expected,
            found: value.type_str(),
        })
    }
}
