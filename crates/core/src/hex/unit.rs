//! The basic hex coordinate type and the numeric bound its components use.
//! See the parent module documentation for a description of the coordinate
//! system.

use crate::hex::HexDirection;
use anyhow::{anyhow, Context};
use derive_more::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use num_traits::{AsPrimitive, Num, Signed};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

/// Any numeric type that can be used as a component of a [Hex] or a
/// [Vector2D](crate::Vector2D). Implemented for all signed integer and float
/// primitives.
///
/// The conversion methods are plain `as` casts, so they follow Rust's native
/// semantics: float to integer truncates toward zero (and saturates at the
/// integer bounds, with NaN becoming 0), integer to float widens, and integer
/// to integer wraps.
pub trait HexNum:
    Num
    + Signed
    + Copy
    + PartialOrd
    + Debug
    + Display
    + AsPrimitive<f64>
    + AsPrimitive<i64>
    + 'static
{
    /// Widen this value to an `f64`
    fn as_f64(self) -> f64;

    /// Narrow an `f64` to this type. Truncates for integer types.
    fn from_f64(value: f64) -> Self;

    /// Convert a (small) integer constant to this type
    fn from_i64(value: i64) -> Self;
}

macro_rules! impl_hex_num {
    ($($t:ty),*) => {
        $(
            impl HexNum for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn from_i64(value: i64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_hex_num!(i8, i16, i32, i64, f32, f64);

/// A cell (or, for float components, any point) in axial hex coordinates.
/// The third cube coordinate `s` is derived as `-q - r`.
///
/// Hexes are plain values: every operation returns a new hex and leaves the
/// receiver alone. Arithmetic comes from the standard operators:
///
/// - `a + b`, `a - b`, `-a` are componentwise
/// - `a * k`, `a / k` scale both components by a scalar `k: N`
///
/// **Division by zero is not checked.** For integer components it panics like
/// any other integer division by zero; for float components the result is
/// infinite or NaN.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
pub struct Hex<N> {
    pub q: N,
    pub r: N,
}

impl<N> Hex<N> {
    pub const fn new(q: N, r: N) -> Self {
        Self { q, r }
    }
}

impl<N: HexNum> Hex<N> {
    /// The hex at `(0, 0)`
    pub fn origin() -> Self {
        Self::new(N::zero(), N::zero())
    }

    /// The derived third cube coordinate. Always `-q - r`.
    pub fn s(&self) -> N {
        -self.q - self.r
    }

    /// Distance between two hexes, in steps. For integer-valued hexes this is
    /// exactly the number of single-cell moves needed to get from one to the
    /// other. Fractional hexes get the continuous generalization of the same
    /// formula.
    pub fn distance(self, other: Self) -> f64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let (q1, r1) = (self.q.as_f64(), self.r.as_f64());
        let (q2, r2) = (other.q.as_f64(), other.r.as_f64());
        let s1 = -q1 - r1;
        let s2 = -q2 - r2;
        // Two adjacent cells are separated by two cube edges, hence the /2
        ((q1 - q2).abs() + (r1 - r2).abs() + (s1 - s2).abs()) / 2.0
    }

    /// Get the hex adjacent to this one in the given direction
    pub fn neighbour(self, direction: HexDirection) -> Self {
        self + direction.offset()
    }

    /// Get all six adjacent hexes, in [HexDirection::ALL] order. Index `i` of
    /// the result is always the neighbour in direction `HexDirection::ALL[i]`.
    pub fn neighbours(self) -> [Self; 6] {
        HexDirection::ALL.map(|direction| self.neighbour(direction))
    }

    /// Round each component to the nearest whole number, with halves rounded
    /// away from zero.
    ///
    /// This rounds `q` and `r` independently. It does **not** enforce the cube
    /// constraint, so for points near a cell corner the result can differ
    /// from the cell that actually contains the point. Use
    /// [Self::cube_round] if that matters.
    pub fn round(self) -> Self {
        Self::new(
            N::from_f64(self.q.as_f64().round()),
            N::from_f64(self.r.as_f64().round()),
        )
    }

    /// Round to the cell that contains this point. All three cube coordinates
    /// are rounded, then whichever moved the most is recomputed from the
    /// other two so that `q + r + s = 0` still holds.
    pub fn cube_round(self) -> Self {
        // https://www.redblobgames.com/grids/hexagons/#rounding
        let (q, r) = (self.q.as_f64(), self.r.as_f64());
        let s = -q - r;
        let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
        let q_diff = (rq - q).abs();
        let r_diff = (rr - r).abs();
        let s_diff = (rs - s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            rq = -rr - rs;
        } else if r_diff > s_diff {
            rr = -rq - rs;
        }
        Self::new(N::from_f64(rq), N::from_f64(rr))
    }

    /// Convert to a hex with another component type, using native `as` casts
    /// on each component
    pub fn cast<M>(self) -> Hex<M>
    where
        N: AsPrimitive<M>,
        M: HexNum,
    {
        Hex::new(AsPrimitive::<M>::as_(self.q), AsPrimitive::<M>::as_(self.r))
    }

    /// Convert to integer components. Truncates fractional values, it does
    /// **not** round. Call [Self::round] first if you want the nearest cell.
    pub fn to_int(self) -> Hex<i64> {
        self.cast()
    }

    /// Convert to float components
    pub fn to_float(self) -> Hex<f64> {
        self.cast()
    }
}

impl<N: Display> Display for Hex<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.q, self.r)
    }
}

/// Parse the `q:r` form that [Display] produces
impl<N> FromStr for Hex<N>
where
    N: FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (q, r) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("invalid hex {:?}, expected q:r", s))?;
        let q = q
            .trim()
            .parse()
            .with_context(|| format!("invalid q component in hex {:?}", s))?;
        let r = r
            .trim()
            .parse()
            .with_context(|| format!("invalid r component in hex {:?}", s))?;
        Ok(Self::new(q, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_arithmetic() {
        let a = Hex::new(-2i64, 3);
        let b = Hex::new(1i64, -2);
        assert_eq!(a + b, Hex::new(-1, 1));
        assert_eq!(a - b, Hex::new(-3, 5));
        assert_eq!(-a, Hex::new(2, -3));
        assert_eq!(Hex::new(2i64, -3) * -2i64, Hex::new(-4, 6));
        assert_eq!(Hex::new(-4i64, 6) / -2i64, Hex::new(2, -3));

        let a = Hex::new(2.5, 3.5);
        let b = Hex::new(1.5, 2.5);
        assert_eq!(a + b, Hex::new(4.0, 6.0));
        assert_eq!(a - b, Hex::new(1.0, 1.0));
        assert_eq!(Hex::new(-5.0, 7.0) / -2.0, Hex::new(2.5, -3.5));
    }

    #[test]
    fn test_integer_division_truncates() {
        assert_eq!(Hex::new(5i64, -5) / 2i64, Hex::new(2, -2));
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero() {
        let _ = Hex::new(1i64, 1) / std::hint::black_box(0i64);
    }

    #[test]
    fn test_float_division_by_zero() {
        let hex = Hex::new(1.0, -1.0) / 0.0;
        assert_eq!(hex.q, f64::INFINITY);
        assert_eq!(hex.r, f64::NEG_INFINITY);
        assert!((Hex::new(0.0f64, 0.0) / 0.0).q.is_nan());
    }

    #[test]
    fn test_s() {
        assert_eq!(Hex::new(1i64, 2).s(), -3);
        assert_eq!(Hex::new(-4i32, 1).s(), 3);
        assert_eq!(Hex::new(0.5, 0.25).s(), -0.75);
    }

    #[test]
    fn test_distance() {
        let p0 = Hex::origin();
        let p1 = Hex::new(-1i64, 1);
        let p2 = Hex::new(2i64, -1);
        let p3 = Hex::new(2i64, -3);

        assert_eq!(p0.distance(p0), 0.0);
        assert_eq!(p3.distance(p3), 0.0);

        assert_eq!(p0.distance(p1), 1.0);
        assert_eq!(p0.distance(p2), 2.0);
        assert_eq!(p0.distance(p3), 3.0);

        assert_eq!(p1.distance(p2), 3.0);
        assert_eq!(p1.distance(p3), 4.0);
        assert_eq!(p2.distance(p3), 2.0);
        assert_eq!(p3.distance(p2), 2.0);
    }

    #[test]
    fn test_distance_fractional() {
        assert_approx_eq!(Hex::origin().distance(Hex::new(0.5, 0.0)), 0.5);
        assert_approx_eq!(Hex::new(0.5, 0.5).distance(Hex::origin()), 1.0);
    }

    #[test]
    fn test_neighbours() {
        let expected = [
            Hex::new(1i64, 0),
            Hex::new(0, 1),
            Hex::new(-1, 1),
            Hex::new(-1, 0),
            Hex::new(0, -1),
            Hex::new(1, -1),
        ];
        assert_eq!(Hex::origin().neighbours(), expected);

        let center = Hex::new(3i64, -7);
        for neighbour in center.neighbours() {
            assert_eq!(center.distance(neighbour), 1.0);
        }
        assert_eq!(
            center.neighbour(HexDirection::West),
            center.neighbours()[3]
        );
    }

    #[test]
    fn test_round() {
        assert_eq!(Hex::new(1.4, -1.6).round(), Hex::new(1.0, -2.0));
        // Halves go away from zero
        assert_eq!(Hex::new(0.5, -0.5).round(), Hex::new(1.0, -1.0));
        assert_eq!(Hex::new(2.5, -2.5).round(), Hex::new(3.0, -3.0));
        // Integer hexes are already round
        assert_eq!(Hex::new(4i64, -9).round(), Hex::new(4, -9));
    }

    #[test]
    fn test_round_ignores_cube_constraint() {
        // q and r both round up to 1, but s = -1.1 only rounds to -1, so the
        // independently rounded result is not the containing cell
        let point = Hex::new(0.55f64, 0.55);
        let rounded = point.round();
        assert_eq!(rounded, Hex::new(1.0, 1.0));
        assert_ne!(rounded.s(), point.s().round());
        assert_eq!(point.cube_round(), Hex::new(1.0, 0.0));
    }

    #[test]
    fn test_cube_round() {
        assert_eq!(Hex::new(0.1, -0.2).cube_round(), Hex::new(0.0, 0.0));
        assert_eq!(Hex::new(1.9, -1.1).cube_round(), Hex::new(2.0, -1.0));
        assert_eq!(Hex::new(-0.7, 1.45).cube_round(), Hex::new(-1.0, 2.0));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Hex::new(1.9, -1.9).to_int(), Hex::new(1, -1));
        assert_eq!(Hex::new(3i64, -2).to_float(), Hex::new(3.0, -2.0));
        assert_eq!(Hex::new(7i64, 8).cast::<i16>(), Hex::new(7i16, 8i16));
    }

    #[test]
    fn test_integer_conversions_are_exact() {
        // 2^53 + 1 has no exact f64 representation
        let big = 9_007_199_254_740_993i64;
        let hex = Hex::new(big, -big);
        assert_eq!(hex.to_int(), hex);
        assert_eq!(hex.cast::<i64>(), hex);
        assert_eq!(Hex::new(i64::MAX, i64::MIN).to_int().q, i64::MAX);

        // Narrowing wraps like a native cast, it doesn't saturate
        assert_eq!(Hex::new(300i64, -129).cast::<i8>(), Hex::new(44i8, 127i8));
        assert_eq!(Hex::new(70_000i32, 5).cast::<i16>(), Hex::new(4464i16, 5));
    }

    #[test]
    fn test_display_parse() {
        let hex = Hex::new(-3i64, 12);
        assert_eq!(hex.to_string(), "-3:12");
        assert_eq!("-3:12".parse::<Hex<i64>>().unwrap(), hex);
        assert_eq!(" 1 : 2 ".parse::<Hex<i64>>().unwrap(), Hex::new(1, 2));
        assert_eq!(
            "0.5:-1.5".parse::<Hex<f64>>().unwrap(),
            Hex::new(0.5, -1.5)
        );

        assert!("3".parse::<Hex<i64>>().is_err());
        assert!("a:1".parse::<Hex<i64>>().is_err());
        assert!("1:1.5".parse::<Hex<i64>>().is_err());
    }
}
