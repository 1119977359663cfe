use crate::hex::{Hex, HexNum};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The 6 directions in which cells line up side-to-side. Each direction is a
/// unit step from one cell center to a neighboring cell center.
///
/// Variants are named for a pointy-topped layout with screen `y` pointing
/// down. **The declaration order is load-bearing**: neighbor lists, rings and
/// spirals all consume directions in [Self::ALL] order, and ring walks pick
/// their side directions by rotating through that same order.
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
pub enum HexDirection {
    /// `(1, 0)`
    East,
    /// `(0, 1)`
    SouthEast,
    /// `(-1, 1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(0, -1)`
    NorthWest,
    /// `(1, -1)`
    NorthEast,
}

impl HexDirection {
    /// All directions, in the canonical order. Each one is 60° clockwise
    /// (on screen) from the previous.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// Position of this direction within [Self::ALL]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a direction by its position in [Self::ALL]. Wraps around, so
    /// any index is valid.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The direction `steps` positions further along [Self::ALL], wrapping.
    /// `ALL[i].rotated(k) == ALL[(i + k) % 6]`.
    pub fn rotated(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// The direction pointing the opposite way
    pub fn opposite(self) -> Self {
        self.rotated(3)
    }

    /// The offset that moves a hex one cell in this direction
    pub fn offset<N: HexNum>(self) -> Hex<N> {
        let (q, r) = match self {
            Self::East => (1, 0),
            Self::SouthEast => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (0, -1),
            Self::NorthEast => (1, -1),
        };
        Hex::new(N::from_i64(q), N::from_i64(r))
    }
}
