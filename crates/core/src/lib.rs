//! Hexgrid is a toolkit for working with hexagonal grids. It covers two
//! things: an axial [Hex] coordinate type with the usual grid operations
//! (distance, neighbours, rings, spirals, lines), and a [layout] module that
//! projects hexes onto a continuous world plane and through a camera onto
//! the screen.
//!
//! ```
//! use hexgrid::{Hex, HexGrid, HexOrientation, CameraSnapshot, Vector2D};
//!
//! let mut grid = HexGrid::new(&HexOrientation::POINTY, Vector2D::new(32.0, 32.0));
//! let camera = CameraSnapshot::new(
//!     Vector2D::new(0.0, 0.0),
//!     1.0,
//!     Vector2D::new(640.0, 480.0),
//! );
//!
//! // The middle of the screen is looking at the middle of hex (0, 0)
//! let hex = grid.screen_to_hex(Vector2D::new(320.0, 240.0), &camera);
//! assert_eq!(hex.to_int(), Hex::new(0, 0));
//! assert!(grid.visible_hexes(&camera).contains(&Hex::new(0, 0)));
//! ```
//!
//! See [LayoutConfig] for loading a layout from a config file.

pub mod hex;
pub mod layout;
mod util;

pub use crate::{
    hex::{Hex, HexDirection, HexNum},
    layout::{
        Camera, CameraSnapshot, HexGrid, HexLayout, HexOrientation, ImagePlacement,
        LayoutConfig, Orientation,
    },
    util::unit::Vector2D,
};

// Used by the exported timed! macro
#[doc(hidden)]
pub use log;
