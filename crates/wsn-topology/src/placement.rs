//! Deterministic pseudo-random node placement.
//!
//! Placement quantizes each axis into a candidate grid of evenly spaced
//! coordinates and samples grid indices without replacement.  Distinct
//! indices per axis guarantee no two nodes share an x or a y coordinate,
//! which keeps nearest-head ties vanishingly rare while still looking like
//! a uniform scatter.

use wsn_core::{Point2, SimRng};

use crate::{TopologyError, TopologyResult};

/// Axis-aligned deployment field, in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl Default for Bounds {
    /// The reference field: a 100 m × 100 m box at the origin.
    fn default() -> Self {
        Self { x1: 0.0, x2: 100.0, y1: 0.0, y2: 100.0 }
    }
}

impl Bounds {
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Geometric center of the field.
    pub fn center(&self) -> Point2 {
        Point2::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// `n` evenly spaced values over `[a, b]`, inclusive of both endpoints.
fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![a];
    }
    let step = (b - a) / (n - 1) as f64;
    (0..n).map(|i| a + step * i as f64).collect()
}

/// Scatter `count` positions inside `bounds` using candidate grids of
/// `grid_points` coordinates per axis.
///
/// X indices are sampled first, then Y indices, from the same RNG stream —
/// the per-axis draws are independent, so positions are not confined to the
/// grid diagonal.
///
/// Fails with [`TopologyError::GridExhausted`] if `count > grid_points`:
/// sampling without replacement cannot produce more indices than the grid
/// holds.
pub fn scatter(
    count: usize,
    grid_points: usize,
    bounds: Bounds,
    rng: &mut SimRng,
) -> TopologyResult<Vec<Point2>> {
    if count == 0 {
        return Err(TopologyError::NoNodes);
    }
    if count > grid_points {
        return Err(TopologyError::GridExhausted {
            requested: count,
            capacity: grid_points,
        });
    }

    let xs = linspace(bounds.x1, bounds.x2, grid_points);
    let ys = linspace(bounds.y1, bounds.y2, grid_points);

    let ind_x = rng.sample_indices(grid_points, count);
    let ind_y = rng.sample_indices(grid_points, count);

    Ok(ind_x
        .into_iter()
        .zip(ind_y)
        .map(|(ix, iy)| Point2::new(xs[ix], ys[iy]))
        .collect())
}

/// Scatter `count` positions on the standard `count²`-point grids — the
/// grid sizing both topology variants use.
pub fn scatter_squared(
    count: usize,
    bounds: Bounds,
    rng: &mut SimRng,
) -> TopologyResult<Vec<Point2>> {
    scatter(count, count.saturating_mul(count), bounds, rng)
}
