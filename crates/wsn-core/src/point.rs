//! Planar coordinate type and spatial utilities.
//!
//! `Point2` uses `f64` coordinates in meters.  The field is a bounded box
//! (100 m × 100 m by default), so planar Euclidean distance is exact — no
//! geodesy involved.  Milestone statistics are sensitive to accumulated
//! rounding across thousands of cycles, hence double precision.

use std::f64::consts::TAU;

/// A position in the deployment field, in meters.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.  Total — defined for every pair of
    /// points, never fails.
    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle of `self` as seen from `center`, normalized to `[0, 2π)`.
    ///
    /// `atan2` returns `(-π, π]`; adding a full turn and reducing modulo 2π
    /// maps every result into the half-open range the sector partition
    /// expects.
    #[inline]
    pub fn angle_from(self, center: Point2) -> f64 {
        (self.y - center.y).atan2(self.x - center.x).rem_euclid(TAU)
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
