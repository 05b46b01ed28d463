//! Circular obstacles and the point-in-circle predicate.

use raymarch_math::Point2;

use crate::error::{RenderError, Result};

/// A circular obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point2,
    /// Radius (non-negative).
    pub radius: f64,
}

impl Circle {
    /// Create a circle, rejecting negative or non-finite radii.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(RenderError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Whether `p` lies in the closed disk of this circle.
    #[inline]
    pub fn contains(&self, p: &Point2) -> bool {
        point_in_circle(p, &self.center, self.radius)
    }
}

/// True iff the distance from `p` to `center` is at most `radius`.
///
/// The boundary counts as inside.
#[inline]
pub fn point_in_circle(p: &Point2, center: &Point2, radius: f64) -> bool {
    (p - center).norm() <= radius
}
