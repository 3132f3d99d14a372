//! Rotation about the detector (z) axis.
//!
//! Slice frames differ from the global frame only by an azimuthal rotation,
//! so the full affine machinery is not needed: a cached cosine/sine pair is
//! enough, and z passes through unchanged.

use super::Xyz;

/// Rotation by a fixed angle about the z axis: (x', y') = R (x, y), z' = z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation2d {
    cos: f64,
    sin: f64,
}

impl Rotation2d {
    /// Creates a counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }

    /// Returns the inverse rotation (negative angle).
    #[inline]
    pub fn inverted(&self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Rotates the transverse part of a point.
    #[inline]
    pub fn apply(&self, p: Xyz) -> Xyz {
        Xyz::from_coords(
            p.x * self.cos - p.y * self.sin,
            p.x * self.sin + p.y * self.cos,
            p.z,
        )
    }
}
