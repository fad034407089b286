//! Project configuration: printer geometry and the song config location.
//!
//! # TOML Example
//!
//! ```toml
//! [printer]
//! x_ang = 1.8
//! y_ang = 1.8
//! z_ang = 1.8
//! x_rpr = 40.0
//! y_rpr = 40.0
//! z_rpr = 8.0
//! x_dim = 220.0
//! y_dim = 220.0
//! z_dim = 250.0
//!
//! [song]
//! config_filepath = "songs/ode_to_joy.toml"
//! ```

use crate::config::{AxisTriple, PathConfig};
use crate::consts::project;
use crate::store::{ConfigStore, Number, ResolveError};
use std::path::Path;

/// Project-wide configuration file.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    store: ConfigStore,
}

impl ProjectConfig {
    /// Create an unloaded project config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Printer angle per motor step for the x, y and z axes.
    ///
    /// Values are returned as stored, integer or float.
    pub fn printer_angles_per_step(&self) -> Result<AxisTriple<Number>, ResolveError> {
        self.store
            .resolve_axes(project::ANGLES_PER_STEP, ConfigStore::resolve_number)
    }

    /// Printer rotation distance per revolution (mm) for the x, y and z axes.
    pub fn printer_rot_distance_per_rev(&self) -> Result<AxisTriple<Number>, ResolveError> {
        self.store
            .resolve_axes(project::ROT_DISTANCE_PER_REV, ConfigStore::resolve_number)
    }

    /// Printer dimensions for the x, y and z axes.
    pub fn printer_dimensions(&self) -> Result<AxisTriple<Number>, ResolveError> {
        self.store
            .resolve_axes(project::DIMENSIONS, ConfigStore::resolve_number)
    }

    /// Path to the song configuration file, exactly as written.
    pub fn song_config_path(&self) -> Result<&Path, ResolveError> {
        self.store
            .resolve_str(project::SONG_CONFIG_PATH)
            .map(Path::new)
    }
}

impl PathConfig for ProjectConfig {
    const KIND: &'static str = "project";

    fn store(&self) -> &ConfigStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }
}
