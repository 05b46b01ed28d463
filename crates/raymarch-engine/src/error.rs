//! Error types for the renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, rendering or exporting a scene.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Ray start and end coincide, so no direction exists.
    #[error("degenerate ray: start and end coincide at ({x}, {y})")]
    DegenerateRay {
        /// X coordinate of the start point.
        x: f64,
        /// Y coordinate of the start point.
        y: f64,
    },

    /// Scene width or height is zero.
    #[error("invalid scene dimensions {width}x{height}: both must be positive")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Circle radius is negative or not finite.
    #[error("invalid circle radius {0}: must be finite and non-negative")]
    InvalidRadius(f64),

    /// Invalid render settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Writing the bitmap file failed.
    #[error("failed to export bitmap to {}: {source}", path.display())]
    Export {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input is not a valid P1 bitmap.
    #[error("malformed bitmap: {0}")]
    MalformedBitmap(String),
}

/// Result type for renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;
