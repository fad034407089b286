//! Prelude module for common re-exports.
//!
//! ```rust
//! use melod_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{AxisTriple, ConfigError, PathConfig};
pub use crate::project::ProjectConfig;
pub use crate::song::SongConfig;

// ─── Resolution ─────────────────────────────────────────────────────
pub use crate::store::{ConfigStore, DataPath, Number, ResolveError};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{DEFAULT_PROJECT_CONFIG, DEFAULT_SEPARATOR};
