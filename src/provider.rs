//! External detector-parameter providers.
//!
//! A provider knows how to describe the detector for some source (a
//! simulation output, a conditions database, ...). Its parameters are
//! flattened into an ordinary `l3transform.config` in a scratch directory and
//! loaded through the text path, so both routes end in the same `Geometry`.
//! The generated file is then archived as `l3transform.config-<unix seconds>`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::geometry::Geometry;
use crate::io::{write_config, CONFIG_FILE_NAME};
use crate::{Result, TransformError};

/// Capability of producing detector parameters for a source.
pub trait ParameterProvider {
    /// Returns the parameters describing `source`.
    fn parameters(&self, source: &Path) -> Result<DetectorParameters>;
}

/// Detector parameters as a provider reports them.
///
/// Rows are indexed by slice row: inner rows first, then outer rows. The
/// response-function widths are optional because providers may not carry
/// them; loading fails when they are absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectorParameters {
    pub b_field_factor: i32,
    pub n_time_bins: usize,
    pub inner_row_count: usize,
    pub outer_row_count: usize,
    pub outer_row_count1: usize,
    pub outer_row_count2: usize,
    pub inner_sector_count: usize,
    pub outer_sector_count: usize,
    pub pad_pitch_inner: f64,
    pub pad_pitch_outer: f64,
    pub z_width: f64,
    pub z_sigma: f64,
    pub z_length: f64,
    pub z_offset: f64,
    pub diffusion_t: f64,
    pub diffusion_l: f64,
    pub pad_length_inner: f64,
    pub pad_length_outer1: f64,
    pub pad_length_outer2: f64,
    pub prf_sigma_inner: Option<f64>,
    pub prf_sigma_outer1: Option<f64>,
    pub prf_sigma_outer2: Option<f64>,
    pub time_sigma: Option<f64>,
    pub row_radius: Vec<f64>,
    pub pads_per_row: Vec<usize>,
}

impl DetectorParameters {
    /// Converts to a geometry table.
    ///
    /// The slice count equals the inner sector count and the rotation shift
    /// is fixed at half a slice.
    pub fn to_geometry(&self) -> Result<Geometry> {
        let row_count = self
            .inner_row_count
            .checked_add(self.outer_row_count)
            .ok_or_else(|| TransformError::Provider("row counts overflow".into()))?;
        let sector_count = self
            .inner_sector_count
            .checked_add(self.outer_sector_count)
            .ok_or_else(|| TransformError::Provider("sector counts overflow".into()))?;
        if row_count == 0 {
            return Err(TransformError::Provider("no pad rows".into()));
        }
        let require = |value: Option<f64>, what: &str| {
            value.ok_or_else(|| TransformError::Provider(format!("missing {}", what)))
        };
        let prf_sigma_inner = require(self.prf_sigma_inner, "inner pad response function")?;
        let prf_sigma_outer1 = require(self.prf_sigma_outer1, "outer1 pad response function")?;
        let prf_sigma_outer2 = require(self.prf_sigma_outer2, "outer2 pad response function")?;
        let time_sigma = require(self.time_sigma, "time response function")?;

        if self.row_radius.len() != row_count || self.pads_per_row.len() != row_count {
            return Err(TransformError::Provider(format!(
                "row tables have {} radii and {} pad counts, expected {}",
                self.row_radius.len(),
                self.pads_per_row.len(),
                row_count
            )));
        }

        let mut geometry = Geometry {
            n_time_bins: self.n_time_bins,
            inner_row_count: self.inner_row_count,
            outer_row_count: self.outer_row_count,
            outer_row_count1: self.outer_row_count1,
            outer_row_count2: self.outer_row_count2,
            inner_sector_count: self.inner_sector_count,
            outer_sector_count: self.outer_sector_count,
            sector_count,
            pad_pitch_inner: self.pad_pitch_inner,
            pad_pitch_outer: self.pad_pitch_outer,
            z_width: self.z_width,
            z_sigma: self.z_sigma,
            z_length: self.z_length,
            z_offset: self.z_offset,
            diffusion_t: self.diffusion_t,
            diffusion_l: self.diffusion_l,
            pad_length_inner: self.pad_length_inner,
            pad_length_outer1: self.pad_length_outer1,
            pad_length_outer2: self.pad_length_outer2,
            prf_sigma_inner,
            prf_sigma_outer1,
            prf_sigma_outer2,
            time_sigma,
            slice_count: self.inner_sector_count,
            row_count,
            rotation_shift: 0.5,
            pi: std::f64::consts::PI,
            row_radius: self.row_radius.clone(),
            pads_per_row: self.pads_per_row.clone(),
            ..Geometry::default()
        };
        geometry.set_b_field_factor(self.b_field_factor);
        Ok(geometry)
    }
}

impl From<&Geometry> for DetectorParameters {
    fn from(g: &Geometry) -> Self {
        Self {
            b_field_factor: g.b_field_factor,
            n_time_bins: g.n_time_bins,
            inner_row_count: g.inner_row_count,
            outer_row_count: g.outer_row_count,
            outer_row_count1: g.outer_row_count1,
            outer_row_count2: g.outer_row_count2,
            inner_sector_count: g.inner_sector_count,
            outer_sector_count: g.outer_sector_count,
            pad_pitch_inner: g.pad_pitch_inner,
            pad_pitch_outer: g.pad_pitch_outer,
            z_width: g.z_width,
            z_sigma: g.z_sigma,
            z_length: g.z_length,
            z_offset: g.z_offset,
            diffusion_t: g.diffusion_t,
            diffusion_l: g.diffusion_l,
            pad_length_inner: g.pad_length_inner,
            pad_length_outer1: g.pad_length_outer1,
            pad_length_outer2: g.pad_length_outer2,
            prf_sigma_inner: Some(g.prf_sigma_inner),
            prf_sigma_outer1: Some(g.prf_sigma_outer1),
            prf_sigma_outer2: Some(g.prf_sigma_outer2),
            time_sigma: Some(g.time_sigma),
            row_radius: g.row_radius.clone(),
            pads_per_row: g.pads_per_row.clone(),
        }
    }
}

/// A fixed parameter set answers for every source.
impl ParameterProvider for DetectorParameters {
    fn parameters(&self, _source: &Path) -> Result<DetectorParameters> {
        Ok(self.clone())
    }
}

/// Asks `provider` about `source` and writes the result as
/// `scratch_dir/l3transform.config`.
pub fn generate_config(
    provider: &dyn ParameterProvider,
    source: &Path,
    scratch_dir: &Path,
) -> Result<PathBuf> {
    let geometry = provider.parameters(source)?.to_geometry()?;
    fs::create_dir_all(scratch_dir)?;
    write_config(scratch_dir, &geometry)
}

/// Renames a generated configuration to `<name>-<unix seconds>`.
///
/// Earlier archives are never replaced: when that name is taken within the
/// same second, a counter is appended (`<name>-<unix seconds>-1`, ...).
pub fn archive_generated(path: &Path) -> Result<PathBuf> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(CONFIG_FILE_NAME);
    let stem = format!("{}-{}", file_name, seconds);
    let mut archived = path.with_file_name(&stem);
    let mut attempt = 0u32;
    while archived.exists() {
        attempt += 1;
        archived = path.with_file_name(format!("{}-{}", stem, attempt));
    }
    fs::rename(path, &archived)?;
    debug!(from = %path.display(), to = %archived.display(), "archived generated configuration");
    Ok(archived)
}
