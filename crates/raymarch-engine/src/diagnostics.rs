//! Diagnostics sinks.
//!
//! Cameras and scenes report what they derive through a [`Diagnostics`]
//! reference handed to them at construction. Nothing here installs a
//! global subscriber; the binary decides where `tracing` output goes.

use std::path::Path;

use raymarch_math::Dir2;

/// Receiver for renderer diagnostics. Every hook defaults to a no-op.
pub trait Diagnostics {
    /// A camera derived its unit view direction.
    fn camera_created(&self, _direction: &Dir2) {}

    /// A ray fan of `_ray_count` rays was generated.
    fn fan_generated(&self, _ray_count: usize) {}

    /// Rendering finished with `_marked_cells` cells set.
    fn render_finished(&self, _marked_cells: usize) {}

    /// The bitmap was written to `_path`.
    fn exported(&self, _path: &Path, _width: usize, _height: usize) {}
}

/// Forwards diagnostics to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn camera_created(&self, direction: &Dir2) {
        tracing::info!("Camera vector = {:.6}, {:.6}", direction.x, direction.y);
    }

    fn fan_generated(&self, ray_count: usize) {
        tracing::debug!(ray_count, "generated ray fan");
    }

    fn render_finished(&self, marked_cells: usize) {
        tracing::info!(marked_cells, "render finished");
    }

    fn exported(&self, path: &Path, width: usize, height: usize) {
        tracing::info!("Exported {}x{} bitmap to {}", width, height, path.display());
    }
}

/// Discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records hook invocations as strings for assertions.
    #[derive(Default)]
    pub(crate) struct RecordingDiagnostics {
        pub(crate) events: RefCell<Vec<String>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn camera_created(&self, direction: &Dir2) {
            self.events
                .borrow_mut()
                .push(format!("camera {:.3} {:.3}", direction.x, direction.y));
        }

        fn fan_generated(&self, ray_count: usize) {
            self.events.borrow_mut().push(format!("fan {ray_count}"));
        }

        fn render_finished(&self, marked_cells: usize) {
            self.events.borrow_mut().push(format!("render {marked_cells}"));
        }

        fn exported(&self, _path: &Path, width: usize, height: usize) {
            self.events
                .borrow_mut()
                .push(format!("export {width}x{height}"));
        }
    }

    #[test]
    fn test_null_diagnostics_is_silent() {
        let sink = NullDiagnostics;
        sink.fan_generated(3);
        sink.render_finished(0);
    }
}
