//! Ray representation.

use raymarch_math::{Dir2, Point2};

use crate::error::{RenderError, Result};

/// A ray segment in 2D space from `start` towards `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin of the ray.
    pub start: Point2,
    /// Point the ray was aimed at.
    pub end: Point2,
    /// Euclidean distance from `start` to `end`.
    pub distance: f64,
    /// Unit direction from `start` to `end`.
    pub direction: Dir2,
}

impl Ray {
    /// Create a ray from `start` to `end`.
    ///
    /// Fails with [`RenderError::DegenerateRay`] when the two points
    /// coincide (or the distance is not finite).
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        let delta = end - start;
        let distance = delta.norm();
        if !distance.is_finite() || distance <= 0.0 {
            return Err(RenderError::DegenerateRay {
                x: start.x,
                y: start.y,
            });
        }
        let direction = Dir2::new_unchecked(delta / distance);
        Ok(Self {
            start,
            end,
            distance,
            direction,
        })
    }

    /// Evaluate the ray at parameter `t`: `start + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.start + t * self.direction.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_distance_and_direction() {
        let ray = Ray::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0)).unwrap();
        assert_relative_eq!(ray.distance, 5.0);
        assert_relative_eq!(ray.direction.x, 0.6);
        assert_relative_eq!(ray.direction.y, 0.8);
        assert_relative_eq!(ray.direction.norm(), 1.0);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)).unwrap();
        let p = ray.at(3.0);
        assert_relative_eq!(p.x, 3.0);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_ray_rejected() {
        let p = Point2::new(2.0, 3.0);
        let err = Ray::new(p, p).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateRay { x, y } if x == 2.0 && y == 3.0));
    }

    #[test]
    fn test_non_finite_ray_rejected() {
        let result = Ray::new(Point2::new(0.0, 0.0), Point2::new(f64::INFINITY, 0.0));
        assert!(result.is_err());
    }
}
