//! Camera: fixed viewing position and direction.

use raymarch_math::Point2;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::ray::Ray;

/// Half-width of the viewport in world units.
///
/// Independent of the output image resolution.
pub const VIEWPORT_HALF_WIDTH: f64 = 50.0;

/// A camera at a fixed position looking towards a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point2,
    view: Ray,
    viewport_half_width: f64,
}

impl Camera {
    /// Create a camera at `position` looking at `look_at`, reporting to `tracing`.
    pub fn new(position: Point2, look_at: Point2) -> Result<Self> {
        Self::with_diagnostics(position, look_at, &TracingDiagnostics)
    }

    /// Create a camera, reporting the derived view direction to `diagnostics`.
    ///
    /// Fails with [`RenderError::DegenerateRay`](crate::RenderError::DegenerateRay)
    /// when `position == look_at`.
    pub fn with_diagnostics(
        position: Point2,
        look_at: Point2,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self> {
        let view = Ray::new(position, look_at)?;
        diagnostics.camera_created(&view.direction);
        Ok(Self {
            position,
            view,
            viewport_half_width: VIEWPORT_HALF_WIDTH,
        })
    }

    /// Camera position.
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Unit view ray from the position towards the look-at point.
    pub fn view(&self) -> &Ray {
        &self.view
    }

    /// Half-width of the viewport in world units.
    pub fn viewport_half_width(&self) -> f64 {
        self.viewport_half_width
    }
}
