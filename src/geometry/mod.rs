//! Detector geometry table.
//!
//! A `Geometry` holds every constant the coordinate transforms read: row
//! radii, pad counts, sector and row partition sizes, and the per-region
//! calibration constants. It is built either from the compiled-in reference
//! values (`Geometry::default()`) or by the configuration reader, and is never
//! mutated once it has been handed out behind an `Arc`.
//!
//! # Row numbering
//!
//! Sectors `[0, inner_sector_count)` number their rows `[0, inner_row_count)`;
//! outer sectors restart at 0 and run to `outer_row_count`. Slice rows span
//! the whole radial range `[0, row_count)`.

pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::precision;

pub use defaults::{INNER_ROW_COUNT, PATCH_COUNT, PATCH_ROWS, ROW_COUNT};

/// Returned by region lookups when a row matches no known region.
pub const REGION_SENTINEL: f64 = -1.0;

/// Pad-plane region a slice row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadRegion {
    /// Inner readout chamber.
    Inner,
    /// First part of the outer chamber (medium pads).
    Outer1,
    /// Second part of the outer chamber (long pads).
    Outer2,
}

/// A readout patch, or every row at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Patch {
    All,
    Number(usize),
}

/// Complete detector description.
///
/// Field names follow the physics vocabulary; the configuration file names
/// (`fNRowLow`, `fX[i]`, ...) are mapped onto them in [`crate::io`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Magnetic field factor; the field is `factor * 0.2` T.
    pub b_field_factor: i32,
    /// Magnetic field (T), always derived from `b_field_factor`.
    pub b_field: f64,
    pub n_time_bins: usize,

    pub inner_row_count: usize,
    pub outer_row_count: usize,
    pub outer_row_count1: usize,
    pub outer_row_count2: usize,

    pub inner_sector_count: usize,
    pub outer_sector_count: usize,
    pub sector_count: usize,

    pub pad_pitch_inner: f64,
    pub pad_pitch_outer: f64,

    /// Drift length per time bin (cm).
    pub z_width: f64,
    pub z_sigma: f64,
    /// Full drift length (cm).
    pub z_length: f64,
    /// Time offset of the readout pulse, in cm of drift.
    pub z_offset: f64,
    pub diffusion_t: f64,
    pub diffusion_l: f64,

    pub pad_length_inner: f64,
    pub pad_length_outer1: f64,
    pub pad_length_outer2: f64,

    pub prf_sigma_inner: f64,
    pub prf_sigma_outer1: f64,
    pub prf_sigma_outer2: f64,

    pub time_sigma: f64,

    pub slice_count: usize,
    pub row_count: usize,
    /// Azimuthal offset, in slices, of slice 0's centre line.
    pub rotation_shift: f64,
    pub pi: f64,

    /// Radius of each slice row (cm), `row_count` entries.
    pub row_radius: Vec<f64>,
    /// Pads in each slice row, `row_count` entries.
    pub pads_per_row: Vec<usize>,

    /// Number of successful loads that produced this table; 0 for defaults.
    pub version: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            b_field_factor: 1,
            b_field: precision::BFIELD_PER_FACTOR,
            n_time_bins: 446,
            inner_row_count: INNER_ROW_COUNT,
            outer_row_count: 96,
            outer_row_count1: 64,
            outer_row_count2: 32,
            inner_sector_count: 36,
            outer_sector_count: 36,
            sector_count: 72,
            pad_pitch_inner: 0.4,
            pad_pitch_outer: 0.6,
            z_width: 0.56599998474121093750,
            z_sigma: 0.22880849748219134199,
            z_length: 250.0,
            z_offset: 0.68642549244657402596,
            diffusion_t: 0.02199999988079071045,
            diffusion_l: 0.02199999988079071045,
            pad_length_inner: 0.75,
            pad_length_outer1: 1.0,
            pad_length_outer2: 1.5,
            prf_sigma_inner: 0.20381128787994384766,
            prf_sigma_outer1: 0.29932481050491333008,
            prf_sigma_outer2: 0.29932320117950439453,
            time_sigma: 0.22880862653255462646,
            slice_count: 36,
            row_count: ROW_COUNT,
            rotation_shift: 0.5,
            pi: std::f64::consts::PI,
            row_radius: defaults::ROW_RADIUS.to_vec(),
            pads_per_row: defaults::PADS_PER_ROW.to_vec(),
            version: 0,
        }
    }
}

impl Geometry {
    /// Sets the field factor and the field derived from it.
    pub fn set_b_field_factor(&mut self, factor: i32) {
        self.b_field_factor = factor;
        self.b_field = factor as f64 * precision::BFIELD_PER_FACTOR;
    }

    #[inline]
    pub fn b_field(&self) -> f64 {
        self.b_field
    }

    /// Transverse momentum (GeV) of a track with curvature `kappa` (1/cm).
    /// Infinite for a straight track or a zero field.
    pub fn pt_from_curvature(&self, kappa: f64) -> f64 {
        precision::BFACT * self.b_field.abs() / kappa.abs()
    }

    #[inline]
    pub fn is_inner_sector(&self, sector: usize) -> bool {
        sector < self.inner_sector_count
    }

    /// True for slices on the A side (first half of the slice range).
    #[inline]
    pub fn is_side_a(&self, slice: usize) -> bool {
        slice < self.slice_count / 2
    }

    /// Pad pitch of the region a sector belongs to.
    #[inline]
    pub fn pad_pitch(&self, sector: usize) -> f64 {
        if self.is_inner_sector(sector) {
            self.pad_pitch_inner
        } else {
            self.pad_pitch_outer
        }
    }

    /// Pad pitch of the region a slice row belongs to.
    #[inline]
    pub fn pad_pitch_for_row(&self, slice_row: usize) -> f64 {
        if slice_row < self.inner_row_count {
            self.pad_pitch_inner
        } else {
            self.pad_pitch_outer
        }
    }

    /// Pads in a slice row, `None` outside the table.
    #[inline]
    pub fn n_pads(&self, slice_row: usize) -> Option<usize> {
        self.pads_per_row.get(slice_row).copied()
    }

    /// First slice row of the second outer region.
    ///
    /// The one-row overlap (`- 1`) is part of the detector mapping: the last
    /// row of the nominal outer1 block already carries outer2 constants.
    #[inline]
    fn outer2_boundary(&self) -> i64 {
        let inner = i64::try_from(self.inner_row_count).unwrap_or(i64::MAX);
        let outer1 = i64::try_from(self.outer_row_count1).unwrap_or(i64::MAX);
        inner.saturating_add(outer1) - 1
    }

    /// Classifies a slice row. `None` only if no region rule matches.
    pub fn pad_region(&self, slice_row: usize) -> Option<PadRegion> {
        let row = i64::try_from(slice_row).unwrap_or(i64::MAX);
        let inner = i64::try_from(self.inner_row_count).unwrap_or(i64::MAX);
        let boundary = self.outer2_boundary();
        if row < inner {
            Some(PadRegion::Inner)
        } else if row < boundary {
            Some(PadRegion::Outer1)
        } else if row >= boundary {
            Some(PadRegion::Outer2)
        } else {
            None
        }
    }

    /// Pad length of a slice row; 0 past the last row.
    pub fn pad_length(&self, slice_row: usize) -> f64 {
        if slice_row >= self.row_count {
            return 0.0;
        }
        match self.pad_region(slice_row) {
            Some(PadRegion::Inner) => self.pad_length_inner,
            Some(PadRegion::Outer1) => self.pad_length_outer1,
            Some(PadRegion::Outer2) => self.pad_length_outer2,
            None => REGION_SENTINEL,
        }
    }

    /// Pad response function width of a slice row; 0 past the last row.
    pub fn prf_sigma(&self, slice_row: usize) -> f64 {
        if slice_row >= self.row_count {
            return 0.0;
        }
        match self.pad_region(slice_row) {
            Some(PadRegion::Inner) => self.prf_sigma_inner,
            Some(PadRegion::Outer1) => self.prf_sigma_outer1,
            Some(PadRegion::Outer2) => self.prf_sigma_outer2,
            None => REGION_SENTINEL,
        }
    }

    /// First slice row of a patch.
    pub fn patch_first_row(&self, patch: Patch) -> Option<usize> {
        match patch {
            Patch::All => Some(0),
            Patch::Number(p) => PATCH_ROWS.get(p).map(|&(first, _)| first),
        }
    }

    /// Last slice row (inclusive) of a patch.
    pub fn patch_last_row(&self, patch: Patch) -> Option<usize> {
        match patch {
            Patch::All => self.row_count.checked_sub(1),
            Patch::Number(p) => PATCH_ROWS.get(p).map(|&(_, last)| last),
        }
    }

    pub fn patch_row_count(&self, patch: Patch) -> Option<usize> {
        let first = self.patch_first_row(patch)?;
        let last = self.patch_last_row(patch)?;
        Some(last + 1 - first)
    }

    /// Patch number that contains a slice row.
    pub fn patch_of_row(&self, slice_row: usize) -> Option<usize> {
        PATCH_ROWS
            .iter()
            .position(|&(first, last)| (first..=last).contains(&slice_row))
    }

    /// Lists every structural inconsistency of the table.
    ///
    /// An empty list means the partitions add up, both row arrays have
    /// `row_count` entries and the radii never decrease. Callers log the
    /// findings; none of them makes the table unusable. Differences from the
    /// reference detector are not inconsistencies and are reported by the
    /// configuration reader instead.
    pub fn check_consistency(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.inner_row_count.checked_add(self.outer_row_count) != Some(self.row_count) {
            issues.push(format!(
                "Inner ({}) plus outer ({}) rows do not add up to {}",
                self.inner_row_count, self.outer_row_count, self.row_count
            ));
        }
        if self.inner_sector_count.checked_add(self.outer_sector_count) != Some(self.sector_count) {
            issues.push(format!(
                "Inner ({}) plus outer ({}) sectors do not add up to {}",
                self.inner_sector_count, self.outer_sector_count, self.sector_count
            ));
        }
        if self.row_radius.len() != self.row_count {
            issues.push(format!(
                "Row radius table has {} entries, expected {}",
                self.row_radius.len(),
                self.row_count
            ));
        }
        if self.pads_per_row.len() != self.row_count {
            issues.push(format!(
                "Pad count table has {} entries, expected {}",
                self.pads_per_row.len(),
                self.row_count
            ));
        }
        if let Some(i) = self.row_radius.windows(2).position(|w| w[1] < w[0]) {
            issues.push(format!(
                "Row radii decrease between rows {} and {}",
                i,
                i + 1
            ));
        }

        issues
    }
}
