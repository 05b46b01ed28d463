#![warn(missing_docs)]

//! Math types for the raymarch renderer.
//!
//! Thin wrappers around nalgebra providing the 2D points, vectors and
//! directions the scene is built from, plus the mapping from world
//! samples to pixel cells.

use nalgebra::{Unit, Vector2};

/// A point in 2D world space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// A unit (normalized) direction vector in 2D space.
pub type Dir2 = Unit<Vector2<f64>>;

/// Map a world-space sample to the pixel cell containing it.
///
/// Both coordinates are floored. Returns `None` when the sample lies
/// outside `[0, width) x [0, height)` or is not finite.
#[inline]
pub fn grid_cell(p: &Point2, width: usize, height: usize) -> Option<(usize, usize)> {
    if !(p.x.is_finite() && p.y.is_finite()) {
        return None;
    }
    if p.x < 0.0 || p.y < 0.0 || p.x >= width as f64 || p.y >= height as f64 {
        return None;
    }
    Some((p.x.floor() as usize, p.y.floor() as usize))
}
