//! tpc-transform: TPC geometry and coordinate transforms
//!
//! Converts between raw readout coordinates (sector, pad row, pad, time bin)
//! and local/global Cartesian space, and derives pseudorapidity and azimuth.
//!
//! The detector description lives in an immutable [`Geometry`] shared through
//! `Arc`. [`GeometryConfig`] owns the current table and replaces it when a
//! configuration file (or an external parameter provider) is loaded;
//! [`Transform`] performs the conversions over whatever table it was built
//! with.
//!
//! ```rust,no_run
//! use tpc_transform::{GeometryConfig, Xyz};
//!
//! let mut config = GeometryConfig::new();
//! if !config.init("/opt/tpc/conf", None) {
//!     // keep the compiled-in reference geometry
//! }
//! let transform = config.transform();
//! let global = transform.raw_to_global(0, 10, 33.0, 120.0).unwrap();
//! let raw = transform.global_to_raw(global, 0, 10).unwrap();
//! assert!((raw.pad - 33.0).abs() < 1e-3);
//! println!("eta = {}", transform.eta(Xyz::from_coords(85.0, 0.0, 40.0)));
//! ```

pub mod precision;
pub mod gp;
pub mod geometry;
pub mod io;
pub mod provider;
pub mod config;
pub mod transform;

// Re-exports for convenience
pub use gp::{Xyz, Rotation2d};
pub use geometry::{Geometry, PadRegion, Patch};
pub use io::{read_config, parse_config, write_config, format_config, CONFIG_FILE_NAME};
pub use provider::{DetectorParameters, ParameterProvider};
pub use config::GeometryConfig;
pub use transform::{RawCoord, RPhiEta, SectorRow, SliceRow, Transform};

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Configuration unavailable: {path}: {source}")]
    ConfigUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error at token {token_index}: {message}")]
    Parse { token_index: usize, message: String },

    #[error("Missing array entry {field}[{index}]")]
    MissingArrayEntry { field: &'static str, index: usize },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Parameter provider failed: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
