//! Constants shared by the MeloD workspace.
//!
//! Single source of truth for the default separator, the default config
//! location and every data path the typed accessors read.

/// Default data path separator.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default project configuration file, relative to the working directory.
pub const DEFAULT_PROJECT_CONFIG: &str = "config/project.toml";

/// Data paths read from the project configuration file.
pub mod project {
    /// Printer angle per motor step, per axis.
    pub const ANGLES_PER_STEP: [&str; 3] = ["printer/x_ang", "printer/y_ang", "printer/z_ang"];

    /// Printer rotation distance per revolution (mm), per axis.
    pub const ROT_DISTANCE_PER_REV: [&str; 3] =
        ["printer/x_rpr", "printer/y_rpr", "printer/z_rpr"];

    /// Printer dimensions, per axis.
    pub const DIMENSIONS: [&str; 3] = ["printer/x_dim", "printer/y_dim", "printer/z_dim"];

    /// Path to the song-specific configuration file.
    pub const SONG_CONFIG_PATH: &str = "song/config_filepath";
}

/// Data paths read from a song configuration file.
pub mod song {
    pub const NAME: &str = "song_name";
    pub const DIRECTORY: &str = "song_directory";
    pub const TEMPO: &str = "tempo";

    /// Octave adjustment, per axis.
    pub const OCTAVES_ADJUSTMENT: [&str; 3] = ["x_octave_adj", "y_octave_adj", "z_octave_adj"];
}
