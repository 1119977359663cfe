use crate::Vector2D;
use serde::{Deserialize, Serialize};

/// Anything that can look at a hex grid. A [HexGrid](crate::HexGrid) only
/// ever reads these three values, so the camera itself can live wherever the
/// caller wants (a game engine entity, a UI widget, a config file...).
pub trait Camera {
    /// World position at the center of the viewport
    fn position(&self) -> Vector2D<f64>;

    /// World to screen scale factor. `2.0` makes everything twice as big.
    fn zoom(&self) -> f64;

    /// Viewport dimensions, in screen units
    fn viewport_size(&self) -> Vector2D<f64>;
}

/// A plain, fixed camera. Useful for tests, and for the CLI where the camera
/// comes out of a config file.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSnapshot {
    pub position: Vector2D<f64>,
    pub zoom: f64,
    pub viewport_size: Vector2D<f64>,
}

impl CameraSnapshot {
    pub fn new(position: Vector2D<f64>, zoom: f64, viewport_size: Vector2D<f64>) -> Self {
        Self {
            position,
            zoom,
            viewport_size,
        }
    }
}

impl Default for CameraSnapshot {
    fn default() -> Self {
        Self {
            position: Vector2D::new(0.0, 0.0),
            zoom: 1.0,
            viewport_size: Vector2D::new(800.0, 600.0),
        }
    }
}

impl Camera for CameraSnapshot {
    fn position(&self) -> Vector2D<f64> {
        self.position
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn viewport_size(&self) -> Vector2D<f64> {
        self.viewport_size
    }
}
