//! Ray fan generation.
//!
//! Rays are aimed at evenly spaced samples along a fixed world-space
//! segment. The segment comes from [`RenderSettings`], not from the
//! camera's view direction or viewport width.

use raymarch_math::Point2;

use crate::error::Result;
use crate::ray::Ray;
use crate::RenderSettings;

/// Generate the ordered ray fan for a camera at `origin`.
///
/// The sampling segment `A -> B` is split into `ray_count` equal steps and
/// ray `i` runs from `origin` to `A + i * step * dir(A -> B)`. `B` itself is
/// never sampled. The result is a pure function of its inputs.
///
/// Fails if a sample coincides with `origin`.
pub fn generate_fan(origin: Point2, settings: &RenderSettings) -> Result<Vec<Ray>> {
    let [ax, ay] = settings.viewport_start;
    let [bx, by] = settings.viewport_end;
    let segment = Ray::new(Point2::new(ax, ay), Point2::new(bx, by))?;
    let step = segment.distance / settings.ray_count as f64;

    (0..settings.ray_count)
        .map(|i| Ray::new(origin, segment.at(i as f64 * step)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fan_size_and_endpoints() {
        let settings = RenderSettings::default();
        let rays = generate_fan(Point2::new(1.0, 1.0), &settings).unwrap();
        assert_eq!(rays.len(), 400);

        let first = rays.first().unwrap();
        assert_relative_eq!(first.end.x, 45.0);
        assert_relative_eq!(first.end.y, 5.0);

        // Middle sample sits on the diagonal.
        let mid = &rays[200];
        assert_relative_eq!(mid.end.x, 25.0, epsilon = 1e-9);
        assert_relative_eq!(mid.end.y, 25.0, epsilon = 1e-9);

        // Last sample stops one step short of B.
        let last = rays.last().unwrap();
        assert_relative_eq!(last.end.x, 5.1, epsilon = 1e-9);
        assert_relative_eq!(last.end.y, 44.9, epsilon = 1e-9);
    }

    #[test]
    fn test_fan_is_deterministic() {
        let settings = RenderSettings::default();
        let a = generate_fan(Point2::new(-3.0, 7.5), &settings).unwrap();
        let b = generate_fan(Point2::new(-3.0, 7.5), &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fan_count_independent_of_origin() {
        let settings = RenderSettings::default();
        for origin in [Point2::new(0.0, 0.0), Point2::new(300.0, -20.0)] {
            assert_eq!(generate_fan(origin, &settings).unwrap().len(), 400);
        }
    }

    #[test]
    fn test_origin_on_sample_fails() {
        let settings = RenderSettings::default();
        assert!(generate_fan(Point2::new(45.0, 5.0), &settings).is_err());
    }
}
