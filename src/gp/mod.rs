//! Coordinate primitives.
//!
//! Points in every frame are `Xyz`; slice frames are related to the global
//! frame by a `Rotation2d` about the detector axis.

mod xyz;
mod rotation;

pub use xyz::Xyz;
pub use rotation::Rotation2d;
