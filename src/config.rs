//! Geometry configuration lifecycle.
//!
//! `GeometryConfig` owns the current `Geometry` and hands it out as
//! `Arc<Geometry>`. Loading never edits a table in place: a new table is
//! parsed in full and swapped in only when parsing succeeded, so a failed
//! load leaves the previous geometry (and its version) untouched.
//!
//! Loading needs `&mut self`; readers holding an `Arc` or a `Transform` keep
//! the table they were given until they ask again.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::geometry::Geometry;
use crate::io::read_config;
use crate::provider::{archive_generated, generate_config, ParameterProvider};
use crate::transform::Transform;
use crate::Result;

#[derive(Clone, Debug)]
pub struct GeometryConfig {
    current: Arc<Geometry>,
    scratch_dir: PathBuf,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryConfig {
    /// Starts from the compiled-in reference geometry.
    pub fn new() -> Self {
        Self::with_geometry(Geometry::default())
    }

    /// Starts from an explicit geometry.
    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            current: Arc::new(geometry),
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Directory where provider output is written before it is loaded.
    /// Defaults to the system temporary directory.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Shared handle to the current table.
    pub fn geometry(&self) -> Arc<Geometry> {
        Arc::clone(&self.current)
    }

    /// Number of successful loads so far.
    pub fn version(&self) -> u32 {
        self.current.version
    }

    /// Transform bound to the current table.
    pub fn transform(&self) -> Transform {
        Transform::new(self.geometry())
    }

    /// Loads a configuration, reporting success as a flag.
    ///
    /// Without a provider, `source` is the directory holding
    /// `l3transform.config`. With a provider, `source` is whatever the
    /// provider understands. On failure the previous geometry stays in
    /// place, so `false` means "carry on with what you had".
    pub fn init(&mut self, source: impl AsRef<Path>, provider: Option<&dyn ParameterProvider>) -> bool {
        match self.try_init(source, provider) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "geometry configuration not loaded, keeping version {}", self.version());
                false
            }
        }
    }

    /// Loads a configuration and returns the new version.
    pub fn try_init(
        &mut self,
        source: impl AsRef<Path>,
        provider: Option<&dyn ParameterProvider>,
    ) -> Result<u32> {
        if self.version() > 0 {
            warn!(
                version = self.version(),
                "initializing the geometry more than once; check the calling code"
            );
        }

        match provider {
            Some(provider) => self.load_from_provider(provider, source.as_ref()),
            None => self.load_text(source.as_ref()),
        }
    }

    fn load_text(&mut self, dir: &Path) -> Result<u32> {
        let mut geometry = read_config(dir, &self.current)?;

        for issue in geometry.check_consistency() {
            error!(dir = %dir.display(), "inconsistent geometry: {}", issue);
        }

        geometry.version = self.current.version + 1;
        let version = geometry.version;
        self.current = Arc::new(geometry);
        info!(dir = %dir.display(), version, "geometry configuration loaded");
        Ok(version)
    }

    fn load_from_provider(&mut self, provider: &dyn ParameterProvider, source: &Path) -> Result<u32> {
        let generated = generate_config(provider, source, &self.scratch_dir)?;
        let scratch_dir = self.scratch_dir.clone();
        let loaded = self.load_text(&scratch_dir);

        if let Err(e) = archive_generated(&generated) {
            warn!(path = %generated.display(), error = %e, "could not archive generated configuration");
        }
        loaded
    }
}
