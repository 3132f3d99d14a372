//! Coordinate transforms.
//!
//! Three frames are involved:
//!
//! - raw: (sector, row, pad, time bin), the readout indices;
//! - local: Cartesian (x, y, z) of one slice, x along the slice centre line;
//! - global: Cartesian (x, y, z) of the detector.
//!
//! Local and global frames differ by a rotation about z of
//! `2*pi / slice_count * (slice + rotation_shift)`. Every method is a pure
//! function of the bound `Geometry` and its arguments, so a `Transform` can
//! be cloned freely and used from any number of threads.
//!
//! Index remapping returns `None` for out-of-range arguments, and every
//! conversion that remaps internally propagates that `None` rather than
//! computing with garbage indices.

mod remap;

use std::f64::consts::PI;
use std::sync::Arc;

use crate::geometry::Geometry;
use crate::gp::{Rotation2d, Xyz};
use crate::precision;

pub use remap::{SectorRow, SliceRow};

/// Pad and time-bin position reconstructed from a space point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawCoord {
    pub pad: f64,
    pub time: f64,
}

/// Spherical description of a point: distance from the origin, azimuth and
/// pseudorapidity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RPhiEta {
    pub r: f64,
    pub phi: f64,
    pub eta: f64,
}

/// Transforms bound to one geometry table.
#[derive(Clone, Debug)]
pub struct Transform {
    geometry: Arc<Geometry>,
}

impl Transform {
    pub fn new(geometry: Arc<Geometry>) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Radius of a slice row; 0 outside `[0, row_count)`.
    pub fn row_to_radius(&self, slice_row: usize) -> f64 {
        if slice_row >= self.geometry.row_count {
            return 0.0;
        }
        self.geometry.row_radius.get(slice_row).copied().unwrap_or(0.0)
    }

    /// Half width of a row's pad plane; 0 outside the pad table.
    pub fn max_y(&self, slice_row: usize) -> f64 {
        match self.geometry.n_pads(slice_row) {
            Some(pads) => self.geometry.pad_pitch_for_row(slice_row) * pads as f64 / 2.0,
            None => 0.0,
        }
    }

    #[inline]
    pub fn pad_length(&self, slice_row: usize) -> f64 {
        self.geometry.pad_length(slice_row)
    }

    #[inline]
    pub fn prf_sigma(&self, slice_row: usize) -> f64 {
        self.geometry.prf_sigma(slice_row)
    }

    /// Azimuth of a slice's local x axis in the global frame.
    pub fn slice_angle(&self, slice: usize) -> f64 {
        let g = &self.geometry;
        2.0 * g.pi / g.slice_count as f64 * (slice as f64 + g.rotation_shift)
    }

    /// Rotation taking local coordinates of `slice` to global ones.
    pub fn slice_rotation(&self, slice: usize) -> Rotation2d {
        Rotation2d::from_angle(self.slice_angle(slice))
    }

    /// Raw readout position to the local frame of its slice.
    ///
    /// x is the row radius, y the pad offset from the row centre and z the
    /// drift coordinate, mirrored so that z grows away from the central
    /// membrane on both sides.
    pub fn raw_to_local(&self, sector: usize, row: usize, pad: f64, time: f64) -> Option<Xyz> {
        let g = &self.geometry;
        let SliceRow { slice, slice_row } = self.sector_row_to_slice(sector, row)?;
        let pads = g.n_pads(slice_row)?;

        let x = self.row_to_radius(slice_row);
        let y = (pad - 0.5 * (pads as f64 - 1.0)) * g.pad_pitch(sector);
        let drift = g.z_width * time - g.z_offset;
        let z = if g.is_side_a(slice) {
            g.z_length - drift
        } else {
            drift - g.z_length
        };
        Some(Xyz::from_coords(x, y, z))
    }

    /// Inverse of the y and z parts of `raw_to_local`.
    pub fn local_to_raw(&self, xyz: Xyz, sector: usize, row: usize) -> Option<RawCoord> {
        let g = &self.geometry;
        let SliceRow { slice_row, .. } = self.sector_row_to_slice(sector, row)?;
        let pads = g.n_pads(slice_row)?;

        let pad = xyz.y / g.pad_pitch(sector) + 0.5 * (pads as f64 - 1.0);
        // first half of the inner or of the outer sector range is side A
        let side_a = if g.is_inner_sector(sector) {
            sector < g.inner_sector_count / 2
        } else {
            sector - g.inner_sector_count < g.outer_sector_count / 2
        };
        let sign = if side_a { 1.0 } else { -1.0 };
        let time = (g.z_length - sign * xyz.z + g.z_offset) / g.z_width;
        Some(RawCoord { pad, time })
    }

    /// Local frame of `slice` to the global frame.
    pub fn local_to_global(&self, xyz: Xyz, slice: usize) -> Xyz {
        self.slice_rotation(slice).apply(xyz)
    }

    /// Local frame of the slice holding (sector, row) to the global frame.
    pub fn local_to_global_sector(&self, xyz: Xyz, sector: usize, row: usize) -> Option<Xyz> {
        let SliceRow { slice, .. } = self.sector_row_to_slice(sector, row)?;
        Some(self.local_to_global(xyz, slice))
    }

    /// Global frame to the local frame of `slice`.
    pub fn global_to_local(&self, xyz: Xyz, slice: usize) -> Xyz {
        self.slice_rotation(slice).inverted().apply(xyz)
    }

    /// Global frame to the local frame of the slice holding `sector`.
    pub fn global_to_local_sector(&self, xyz: Xyz, sector: usize) -> Option<Xyz> {
        let slice = self.sector_to_slice(sector)?;
        Some(self.global_to_local(xyz, slice))
    }

    pub fn raw_to_global(&self, sector: usize, row: usize, pad: f64, time: f64) -> Option<Xyz> {
        let local = self.raw_to_local(sector, row, pad, time)?;
        self.local_to_global_sector(local, sector, row)
    }

    pub fn global_to_raw(&self, xyz: Xyz, sector: usize, row: usize) -> Option<RawCoord> {
        let local = self.global_to_local_sector(xyz, sector)?;
        self.local_to_raw(local, sector, row)
    }

    /// Local azimuth of `slice` to global azimuth in `[0, 2*pi)`.
    pub fn local_to_global_angle(&self, angle: f64, slice: usize) -> f64 {
        precision::normalize_angle(angle + self.slice_angle(slice), self.geometry.pi)
    }

    /// Global azimuth to the local azimuth of `slice`, in `[0, 2*pi)`.
    pub fn global_to_local_angle(&self, angle: f64, slice: usize) -> f64 {
        precision::normalize_angle(angle - self.slice_angle(slice), self.geometry.pi)
    }

    /// Pseudorapidity `0.5 * ln((r + z) / (r - z))`.
    ///
    /// Points on the z axis (and the origin) have no finite pseudorapidity;
    /// the result is then +/-infinity or NaN, as IEEE arithmetic gives it.
    pub fn eta(&self, xyz: Xyz) -> f64 {
        pseudorapidity(xyz.modulus(), xyz.z)
    }

    /// Azimuth `atan2(y, x)` in `(-pi, pi]`.
    pub fn phi(&self, xyz: Xyz) -> f64 {
        let phi = xyz.y.atan2(xyz.x);
        // atan2 yields -pi for a negative zero y
        if phi <= -PI {
            PI
        } else {
            phi
        }
    }

    pub fn r_phi_eta(&self, xyz: Xyz) -> RPhiEta {
        let r = xyz.modulus();
        RPhiEta {
            r,
            phi: self.phi(xyz),
            eta: pseudorapidity(r, xyz.z),
        }
    }

    /// Pseudorapidity of a raw position in slice 0.
    pub fn eta_of_raw(&self, slice_row: usize, pad: f64, time: f64) -> Option<f64> {
        let SectorRow { sector, row } = self.slice_to_sector(0, slice_row)?;
        let local = self.raw_to_local(sector, row, pad, time)?;
        Some(self.eta(local))
    }
}

#[inline]
fn pseudorapidity(r: f64, z: f64) -> f64 {
    0.5 * ((r + z) / (r - z)).ln()
}
