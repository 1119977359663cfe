//! This module holds the hex coordinate type and everything needed to walk
//! around a hex grid with it.
//!
//! ## Coordinate System
//!
//! Cells are addressed with **axial coordinates** `(q, r)`. See
//! [Amit Patel's guide](https://www.redblobgames.com/grids/hexagons/#coordinates-axial)
//! for the full story. Axial coordinates are a projection of the cube
//! coordinate system `(q, r, s)` onto two of its axes: every cell satisfies
//! `q + r + s = 0`, so `s` can always be derived as `-q - r` and is never
//! stored.
//!
//! A [Hex] is generic over its component type (see [HexNum]):
//!
//! - **Integer hexes** (`Hex<i64>` etc.) always refer to whole cells
//! - **Float hexes** (`Hex<f64>`) can also refer to any point _between_ cell
//!   centers. These "fractional" hexes are what you get back when projecting
//!   a continuous point into hex space, see
//!   [HexLayout::point_to_hex](crate::HexLayout::point_to_hex). Call
//!   [Hex::round] to snap one back to a cell.
//!
//! ## Directions
//!
//! The six neighbors of a cell are reached by adding one of the unit offsets
//! in [HexDirection]. The order of those directions is part of the public
//! contract: neighbor lists, rings and spirals are all generated by walking
//! the directions in [HexDirection::ALL] order.
//!
//! ```
//! use hexgrid::Hex;
//!
//! let center = Hex::new(0i64, 0);
//! assert_eq!(center.spiral(2).len(), 19);
//! assert_eq!(center.distance(Hex::new(2, -1)), 2.0);
//! ```

mod direction;
mod traverse;
mod unit;

pub use self::{direction::*, unit::*};
