//! Song configuration: identity, tempo and per-axis octave shifts.
//!
//! # TOML Example
//!
//! ```toml
//! song_name = "Ode to Joy"
//! song_directory = "songs/ode_to_joy"
//! tempo = 120
//! x_octave_adj = 0
//! y_octave_adj = -1
//! z_octave_adj = 1
//! ```

use crate::config::{AxisTriple, PathConfig};
use crate::consts::song;
use crate::store::{ConfigStore, Number, ResolveError};
use std::path::Path;

/// Song-specific configuration file, usually referenced by the project config.
#[derive(Debug, Clone, Default)]
pub struct SongConfig {
    store: ConfigStore,
}

impl SongConfig {
    /// Create an unloaded song config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Song name and song directory, in that order.
    pub fn song_properties(&self) -> Result<(&str, &Path), ResolveError> {
        Ok((
            self.store.resolve_str(song::NAME)?,
            Path::new(self.store.resolve_str(song::DIRECTORY)?),
        ))
    }

    /// Tempo as stored, integer or float.
    pub fn song_tempo(&self) -> Result<Number, ResolveError> {
        self.store.resolve_number(song::TEMPO)
    }

    /// Octave adjustment for the x, y and z axes.
    pub fn song_octaves_adjustment(&self) -> Result<AxisTriple<i64>, ResolveError> {
        self.store
            .resolve_axes(song::OCTAVES_ADJUSTMENT, ConfigStore::resolve_integer)
    }
}

impl PathConfig for SongConfig {
    const KIND: &'static str = "song";

    fn store(&self) -> &ConfigStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(doc: &str) -> SongConfig {
        SongConfig {
            store: ConfigStore::from_table(toml::from_str(doc).unwrap()),
        }
    }

    #[test]
    fn song_accessors() {
        let config = song(
            r#"
song_name = "Ode to Joy"
song_directory = "songs/ode_to_joy"
tempo = 120
x_octave_adj = 0
y_octave_adj = -1
z_octave_adj = 1
"#,
        );
        assert_eq!(
            config.song_properties(),
            Ok(("Ode to Joy", Path::new("songs/ode_to_joy")))
        );
        assert_eq!(config.song_tempo(), Ok(Number::Integer(120)));
        assert_eq!(config.song_octaves_adjustment(), Ok((0, -1, 1)));
    }

    #[test]
    fn float_tempo_is_kept_as_float() {
        let config = song("tempo = 92.5");
        assert_eq!(config.song_tempo(), Ok(Number::Float(92.5)));
    }

    #[test]
    fn string_tempo_is_rejected() {
        let config = song(r#"tempo = "fast""#);
        assert_eq!(
            config.song_tempo(),
            Err(ResolveError::UnexpectedType {
                path: "tempo".to_string(),
                expected: "integer or float",
                found: "string",
            })
        );
    }

    #[test]
    fn missing_directory_fails_properties() {
        let config = song(r#"song_name = "Ode to Joy""#);
        assert_eq!(
            config.song_properties(),
            Err(ResolveError::NotFound {
                path: "song_directory".to_string()
            })
        );
    }

    #[test]
    fn fractional_octave_is_rejected() {
        let config = song(
            r#"
x_octave_adj = 0
y_octave_adj = 0.5
z_octave_adj = 0
"#,
        );
        assert!(matches!(
            config.song_octaves_adjustment(),
            Err(ResolveError::UnexpectedType { found: "float", .. })
        ));
    }
}
