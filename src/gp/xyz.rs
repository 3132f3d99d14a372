//! Cartesian coordinate triple.
//!
//! Local and global space points are both stored as an `Xyz`; which frame a
//! value lives in is decided by the function that produced it.

/// Cartesian coordinate {X, Y, Z} in cm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Creates an Xyz at the origin.
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates an Xyz with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin.
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.square_modulus().sqrt()
    }

    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Distance from the detector (z) axis.
    #[inline]
    pub fn transverse(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns true if every coordinate matches within `tolerance`.
    #[inline]
    pub fn is_equal(&self, other: &Xyz, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}
