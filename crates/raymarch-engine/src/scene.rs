//! Scene: obstacles, ray fan and occupancy buffer.

use std::path::Path;

use rayon::prelude::*;

use crate::bitmap::Bitmap;
use crate::camera::Camera;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{RenderError, Result};
use crate::fan::generate_fan;
use crate::march::march_ray;
use crate::pbm::export_pbm;
use crate::ray::Ray;
use crate::shape::Circle;
use crate::RenderSettings;

/// Lifecycle of a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// No rays generated, buffer all zero.
    Empty,
    /// Rays generated and buffer marked.
    Rendered,
    /// Bitmap written to a file.
    Exported,
}

/// A scene of circular obstacles viewed from a borrowed [`Camera`].
pub struct Scene<'a> {
    camera: &'a Camera,
    settings: RenderSettings,
    obstacles: Vec<Circle>,
    rays: Vec<Ray>,
    occupancy: Bitmap,
    phase: ScenePhase,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Scene<'a> {
    /// Create an empty `width` x `height` scene with default settings.
    pub fn new(camera: &'a Camera, width: usize, height: usize) -> Result<Self> {
        Self::with_settings(camera, width, height, RenderSettings::default())
    }

    /// Create an empty scene with explicit render settings.
    pub fn with_settings(
        camera: &'a Camera,
        width: usize,
        height: usize,
        settings: RenderSettings,
    ) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        settings.validate()?;

        Ok(Self {
            camera,
            settings,
            obstacles: Vec::new(),
            rays: Vec::new(),
            occupancy: Bitmap::new(width, height),
            phase: ScenePhase::Empty,
            diagnostics: &TracingDiagnostics,
        })
    }

    /// Route diagnostics to `diagnostics` instead of `tracing`.
    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Register an obstacle. Registration order is test order.
    pub fn add_entity(&mut self, circle: Circle) {
        self.obstacles.push(circle);
    }

    /// Generate the ray fan and march every ray into the buffer.
    ///
    /// The ray list and buffer are cleared first, so rendering twice gives
    /// the same result as rendering once. On error the scene is left as far
    /// as it got: nothing is rolled back.
    pub fn render(&mut self) -> Result<()> {
        self.rays.clear();
        self.occupancy.clear();
        self.phase = ScenePhase::Empty;

        self.rays = generate_fan(self.camera.position(), &self.settings)?;
        self.diagnostics.fan_generated(self.rays.len());

        let (width, height) = (self.width(), self.height());
        let steps = self.settings.march_steps;
        let obstacles = &self.obstacles;

        if self.settings.parallel {
            let marked: Vec<Vec<usize>> = self
                .rays
                .par_iter()
                .map(|ray| march_ray(ray, obstacles, width, height, steps))
                .collect();
            for index in marked.into_iter().flatten() {
                self.occupancy.mark(index);
            }
        } else {
            for ray in &self.rays {
                for index in march_ray(ray, obstacles, width, height, steps) {
                    self.occupancy.mark(index);
                }
            }
        }

        self.phase = ScenePhase::Rendered;
        self.diagnostics
            .render_finished(self.occupancy.count_marked());
        Ok(())
    }

    /// Write the buffer to `path` as a P1 bitmap.
    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        export_pbm(&self.occupancy, path)?;
        self.phase = ScenePhase::Exported;
        self.diagnostics
            .exported(path, self.width(), self.height());
        Ok(())
    }

    /// Camera the scene is viewed from.
    pub fn camera(&self) -> &Camera {
        self.camera
    }

    /// Render settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Registered obstacles, in registration order.
    pub fn obstacles(&self) -> &[Circle] {
        &self.obstacles
    }

    /// Generated rays, in generation order.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Occupancy buffer.
    pub fn occupancy(&self) -> &Bitmap {
        &self.occupancy
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.occupancy.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.occupancy.height()
    }
}
