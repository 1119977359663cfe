use crate::{layout::Orientation, Vector2D};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Serializable description of a [HexLayout](crate::HexLayout). Use
/// [HexLayout::from_config](crate::HexLayout::from_config) or
/// [HexGrid::from_config](crate::HexGrid::from_config) to turn one into the
/// real thing; that's where validation happens.
///
/// Any field missing from a deserialized config takes its default value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pointy- or flat-topped cells
    pub orientation: Orientation,

    /// Per-axis cell radius, in world units. Both components must be
    /// positive, otherwise the world to hex conversion divides by zero (or
    /// flips the grid).
    #[validate(custom = "validate_positive_size")]
    pub size: Vector2D<f64>,

    /// World position of the center of hex `(0, 0)`
    pub origin: Vector2D<f64>,

    /// Initial zoom multiplier applied to `size`
    #[validate(range(min = 0.001))]
    pub zoom: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Pointy,
            size: Vector2D::new(1.0, 1.0),
            origin: Vector2D::new(0.0, 0.0),
            zoom: 1.0,
        }
    }
}

fn validate_positive_size(size: &Vector2D<f64>) -> Result<(), ValidationError> {
    // Written so that NaN fails too
    if size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("size components must be positive"))
    }
}
