//! Discrete collision marching.
//!
//! Instead of solving ray/circle intersections, each ray is sampled at
//! `start + t * direction` for `t = 1, 2, ..., steps`. The first in-bounds
//! sample inside any obstacle marks its cell and switches the ray to
//! [`MarchState::Occluded`]; from then on every in-bounds sample is marked
//! without testing obstacles, so a hit casts a shadow for the rest of the
//! march.

use raymarch_math::grid_cell;

use crate::ray::Ray;
use crate::shape::Circle;

/// Per-ray marching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarchState {
    /// No obstacle hit yet; samples are tested against obstacles.
    #[default]
    Scanning,
    /// An obstacle was hit; every later sample is marked.
    Occluded,
}

impl MarchState {
    /// State after a sample whose obstacle test returned `hit`.
    ///
    /// Once occluded, a ray stays occluded.
    #[inline]
    pub fn advance(self, hit: bool) -> Self {
        match self {
            MarchState::Scanning if hit => MarchState::Occluded,
            state => state,
        }
    }

    /// Whether samples in this state mark their cell.
    #[inline]
    pub fn is_occluded(self) -> bool {
        self == MarchState::Occluded
    }
}

/// March one ray through a `width` x `height` grid.
///
/// Returns the flat row-major indices the ray marks, in step order. A cell
/// may appear more than once. Obstacles are tested in registration order
/// and only for in-bounds samples.
pub fn march_ray(
    ray: &Ray,
    obstacles: &[Circle],
    width: usize,
    height: usize,
    steps: usize,
) -> Vec<usize> {
    let mut marked = Vec::new();
    let mut state = MarchState::Scanning;

    for step in 1..=steps {
        let sample = ray.at(step as f64);
        let Some((x, y)) = grid_cell(&sample, width, height) else {
            continue;
        };

        if !state.is_occluded() {
            let hit = obstacles.iter().any(|c| c.contains(&sample));
            state = state.advance(hit);
        }
        if state.is_occluded() {
            marked.push(y * width + x);
        }
    }

    marked
}
