#![warn(missing_docs)]

//! Ray-marched occupancy rendering for 2D circle scenes.
//!
//! A fan of rays is cast from a single camera position and each ray is
//! stepped forward in unit increments. The first sample that lands inside
//! an obstacle marks its pixel, and every later sample along the same ray
//! is marked as well (the obstacle's shadow). The resulting binary image
//! is exported as an ASCII PBM (`P1`) file.
//!
//! # Architecture
//!
//! - [`Ray`], [`Circle`] - geometry primitives
//! - [`Camera`] - viewing position and direction
//! - [`fan`] - ray fan generation
//! - [`march`] - per-ray collision marching
//! - [`Scene`] - owns obstacles, rays and the [`Bitmap`], drives rendering
//! - [`pbm`] - P1 bitmap reader and writer
//!
//! # Example
//!
//! ```no_run
//! use raymarch_engine::{Camera, Circle, Scene};
//! use raymarch_math::Point2;
//!
//! # fn main() -> raymarch_engine::Result<()> {
//! let camera = Camera::new(Point2::new(1.0, 1.0), Point2::new(50.0, 50.0))?;
//! let mut scene = Scene::new(&camera, 640, 480)?;
//! scene.add_entity(Circle::new(Point2::new(45.0, 45.0), 15.0)?);
//! scene.render()?;
//! scene.export_to_file("out.pbm")?;
//! # Ok(())
//! # }
//! ```

pub mod bitmap;
pub mod camera;
pub mod diagnostics;
pub mod error;
pub mod fan;
pub mod march;
pub mod pbm;
mod ray;
pub mod scene;
mod shape;

pub use bitmap::Bitmap;
pub use camera::{Camera, VIEWPORT_HALF_WIDTH};
pub use diagnostics::{Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use error::{RenderError, Result};
pub use march::{march_ray, MarchState};
pub use ray::Ray;
pub use scene::{Scene, ScenePhase};
pub use shape::{point_in_circle, Circle};

use serde::{Deserialize, Serialize};

/// Rendering parameters.
///
/// The defaults reproduce the fixed sampling segment, ray count and march
/// length the renderer has always used. Smaller values make cheap test grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// First endpoint of the world-space sampling segment.
    pub viewport_start: [f64; 2],
    /// Second endpoint of the world-space sampling segment.
    pub viewport_end: [f64; 2],
    /// Number of rays in the fan.
    pub ray_count: usize,
    /// Number of unit steps each ray is marched.
    pub march_steps: usize,
    /// March rays on the rayon thread pool.
    pub parallel: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            viewport_start: [45.0, 5.0],
            viewport_end: [5.0, 45.0],
            ray_count: 400,
            march_steps: 640,
            parallel: false,
        }
    }
}

impl RenderSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        let mut coords = self.viewport_start.iter().chain(self.viewport_end.iter());
        if coords.any(|c| !c.is_finite()) {
            return Err(RenderError::InvalidSettings(
                "viewport endpoints must be finite".into(),
            ));
        }
        if self.viewport_start == self.viewport_end {
            return Err(RenderError::InvalidSettings(
                "viewport endpoints must differ".into(),
            ));
        }
        if self.ray_count == 0 {
            return Err(RenderError::InvalidSettings(
                "ray_count must be positive".into(),
            ));
        }
        if self.march_steps == 0 {
            return Err(RenderError::InvalidSettings(
                "march_steps must be positive".into(),
            ));
        }
        Ok(())
    }
}
