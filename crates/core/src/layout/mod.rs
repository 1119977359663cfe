//! Conversions between hex space and the continuous planes that a hex grid
//! gets drawn onto.
//!
//! ## Coordinate Spaces
//!
//! There are three coordinate spaces in play:
//!
//! ### Hex Space
//!
//! Axial `(q, r)` coordinates, as described in [crate::hex]. Integer hexes are
//! cells, float hexes can be anywhere.
//!
//! ### World Space
//!
//! A continuous Cartesian plane that the grid is laid out on. A [HexLayout]
//! defines the mapping between hex space and world space: which way the cells
//! point ([HexOrientation]), how big each cell is, where hex `(0, 0)` sits,
//! and a zoom factor applied on top of the cell size.
//!
//! ```text
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//! ```
//!
//! `o` is the layout origin. Like most 2D graphics APIs, `y` grows downward.
//!
//! ### Screen Space
//!
//! What a [Camera] actually sees. The camera sits at some world position,
//! looking at it with some zoom, through a viewport of some size. Screen
//! coordinates put `(0, 0)` at the top-left of the viewport, and the camera's
//! world position at the middle of it:
//!
//! ```text
//! screen = (world - camera.position) * camera.zoom + viewport / 2
//! ```
//!
//! [HexGrid] chains the two mappings together, so you can go straight from
//! a hex to a pixel and back.

mod camera;
mod config;
mod grid;

pub use self::{camera::*, config::*, grid::*};

use crate::{hex::HexNum, Hex, Vector2D};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// √3, spelled out so the orientation tables can be `const`
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The geometry of one way of laying out hexagons. Holds the 2x2 matrix that
/// maps axial `(q, r)` onto the plane (`f0..f3`), its inverse (`b0..b3`),
/// and the angle of the first corner as a fraction of 60°.
///
/// You generally want one of the two canonical instances,
/// [HexOrientation::POINTY] or [HexOrientation::FLAT].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexOrientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

impl HexOrientation {
    /// Pointy-topped hexagons: a vertex at the top and bottom, flat sides on
    /// the left and right. Cells in the same `r` row line up horizontally.
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Flat-topped hexagons: flat sides on the top and bottom, a vertex on
    /// the left and right. Cells in the same `q` column line up vertically.
    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// Axial to unit-cell world, `F · (q, r)`
    fn forward(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// Unit-cell world to axial, `B · (x, y)`
    fn inverse(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }
}

/// Names for the canonical [HexOrientation]s. This is what gets used in
/// config files.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Pointy,
    Flat,
}

impl Orientation {
    /// Get the orientation constants for this variant
    pub fn geometry(self) -> &'static HexOrientation {
        match self {
            Self::Pointy => &HexOrientation::POINTY,
            Self::Flat => &HexOrientation::FLAT,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Pointy
    }
}

/// The mapping between hex space and world space. See the module-level docs
/// for a description of both.
///
/// The orientation is a shared reference to one of the `'static` orientation
/// constants; any number of layouts can point at the same one.
///
/// All conversions are pure. The only field that the library itself ever
/// changes is `zoom`, and only via
/// [HexGrid::screen_to_hex](crate::HexGrid::screen_to_hex).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    pub orientation: &'static HexOrientation,
    /// Per-axis cell radius (center to vertex), in world units, before zoom
    pub size: Vector2D<f64>,
    /// World position of the center of hex `(0, 0)`
    pub origin: Vector2D<f64>,
    /// Multiplier applied on top of `size`
    pub zoom: f64,
}

impl HexLayout {
    pub fn new(
        orientation: &'static HexOrientation,
        size: Vector2D<f64>,
        origin: Vector2D<f64>,
        zoom: f64,
    ) -> Self {
        Self {
            orientation,
            size,
            origin,
            zoom,
        }
    }

    /// Build a layout from config. Returns an error if the config is
    /// invalid.
    pub fn from_config(config: &LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.orientation.geometry(),
            config.size,
            config.origin,
            config.zoom,
        ))
    }

    /// The cell size with zoom applied, i.e. the actual per-axis radius of a
    /// cell in world units
    pub fn zoomed_size(&self) -> Vector2D<f64> {
        self.size * self.zoom
    }

    /// Convert a hex to the world position of its center (or, for a
    /// fractional hex, of the exact point it refers to).
    pub fn hex_to_point<N: HexNum>(&self, hex: Hex<N>) -> Vector2D<f64> {
        let axial = Vector2::new(hex.q.as_f64(), hex.r.as_f64());
        let unit: Vector2D<f64> = (self.orientation.forward() * axial).into();
        unit.scale(self.zoomed_size()) + self.origin
    }

    /// Convert a world position to the (generally fractional) hex at that
    /// point. This is the exact inverse of [Self::hex_to_point]. Use
    /// [Hex::round] on the result to get the cell.
    pub fn point_to_hex(&self, point: Vector2D<f64>) -> Hex<f64> {
        let unit = (point - self.origin).unscale(self.zoomed_size());
        let axial = self.orientation.inverse() * Vector2::from(unit);
        Hex::new(axial.x, axial.y)
    }

    /// Get the six corners of a hex, in world space. Corner `i` sits at angle
    /// `60° * (i + start_angle)` from the center, so pointy layouts start at
    /// 30° and flat layouts at 0°. Angles are measured with `y` pointing
    /// down, so corners go clockwise on screen.
    pub fn hex_corners<N: HexNum>(&self, hex: Hex<N>) -> [Vector2D<f64>; 6] {
        let center = self.hex_to_point(hex);
        let size = self.zoomed_size();
        let start_angle = self.orientation.start_angle;
        [0, 1, 2, 3, 4, 5].map(|i| {
            let angle = 2.0 * PI * (i as f64 + start_angle) / 6.0;
            center + Vector2D::new(angle.cos(), angle.sin()).scale(size)
        })
    }
}
