//! Numeric tolerances and physical constants.
//!
//! Tolerances are used when comparing reconstructed coordinates; the
//! physical constants are fixed properties of the readout and are never
//! overridden by a configuration file.

/// Relative tolerance a raw -> global -> raw round trip must honour.
/// Value: 1.0e-5
pub const ROUND_TRIP: f64 = 1.0e-5;

/// Angular tolerance (radians) for comparing azimuths.
/// Value: 1.0e-12
pub const ANGULAR: f64 = 1.0e-12;

/// Conversion between curvature and transverse momentum, GeV/(T cm).
pub const BFACT: f64 = 0.0029980;

/// Magnetic field (T) per unit of field factor.
pub const BFIELD_PER_FACTOR: f64 = 0.2;

/// Relative comparison `|a - b| <= tol * max(|a|, |b|)`, falling back to
/// an absolute comparison when both values are near zero.
#[inline]
pub fn relative_eq(a: f64, b: f64, tol: f64) -> bool {
    let scale = a.abs().max(b.abs());
    if scale < 1.0 {
        (a - b).abs() <= tol
    } else {
        (a - b).abs() <= tol * scale
    }
}

/// Normalizes an angle into `[0, 2*pi)`.
#[inline]
pub fn normalize_angle(angle: f64, pi: f64) -> f64 {
    let two_pi = 2.0 * pi;
    let a = angle.rem_euclid(two_pi);
    // rem_euclid may round up to exactly 2*pi for tiny negative inputs
    if a >= two_pi {
        0.0
    } else {
        a
    }
}
