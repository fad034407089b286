//! MeloD Common Library
//!
//! Configuration access for the MeloD printer music player: TOML loading,
//! slash-separated data-path resolution and fixed-path accessors for the
//! project and song configuration files.
//!
//! # Module Structure
//!
//! - [`store`] - Configuration store and data-path resolver
//! - [`config`] - Loading errors and the shared [`config::PathConfig`] trait
//! - [`project`] - Project config accessors (printer geometry, song config path)
//! - [`song`] - Song config accessors (name, tempo, octave adjustments)
//! - [`consts`] - Separator, default paths and accessor data paths
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! melod = { package = "melod_common", path = "../melod_common" }
//! ```
//!
//! ```rust
//! use melod_common::prelude::*;
//!
//! let project = ProjectConfig::new();
//! assert_eq!(project.printer_dimensions(), Err(ResolveError::NotLoaded));
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod project;
pub mod song;
pub mod store;
