use crate::hex::HexNum;
use num_traits::AsPrimitive;
use derive_more::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A 2D point or displacement in a Cartesian plane. Used for both world space
/// and screen space; see [crate::layout] for what those mean.
///
/// Like [Hex](crate::Hex), this is a plain value generic over its component
/// type, with componentwise `+`/`-` and scalar `*`/`/`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
pub struct Vector2D<N> {
    pub x: N,
    pub y: N,
}

impl<N> Vector2D<N> {
    pub const fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N: HexNum> Vector2D<N> {
    /// Euclidean distance between two points
    pub fn distance(self, other: Self) -> f64 {
        let dx = (self.x - other.x).as_f64();
        let dy = (self.y - other.y).as_f64();
        dx.hypot(dy)
    }

    /// Convert to integer components with native `as` casts. Truncates,
    /// does not round.
    pub fn to_int(self) -> Vector2D<i64> {
        Vector2D::new(AsPrimitive::<i64>::as_(self.x), AsPrimitive::<i64>::as_(self.y))
    }

    /// Convert to float components
    pub fn to_float(self) -> Vector2D<f64> {
        Vector2D::new(AsPrimitive::<f64>::as_(self.x), AsPrimitive::<f64>::as_(self.y))
    }
}

impl Vector2D<f64> {
    /// Multiply each component by the matching component of another vector.
    /// Handy for applying a per-axis scale like a cell size.
    pub fn scale(self, factors: Self) -> Self {
        Self::new(self.x * factors.x, self.y * factors.y)
    }

    /// Divide each component by the matching component of another vector.
    /// The inverse of [Self::scale].
    pub fn unscale(self, factors: Self) -> Self {
        Self::new(self.x / factors.x, self.y / factors.y)
    }
}

impl<N: Display> Display for Vector2D<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2D<f64> {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Vector2D<f64>> for nalgebra::Vector2<f64> {
    fn from(other: Vector2D<f64>) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_arithmetic() {
        let a = Vector2D::new(3i64, -4);
        let b = Vector2D::new(1i64, 2);
        assert_eq!(a + b, Vector2D::new(4, -2));
        assert_eq!(a - b, Vector2D::new(2, -6));
        assert_eq!(a * 3i64, Vector2D::new(9, -12));
        assert_eq!(Vector2D::new(9i64, -12) / 3i64, Vector2D::new(3, -4));
        assert_eq!(Vector2D::new(7i64, -7) / 2i64, Vector2D::new(3, -3));

        let a = Vector2D::new(1.5, -2.5);
        assert_eq!(a * 2.0, Vector2D::new(3.0, -5.0));
        assert_eq!(a / 0.5, Vector2D::new(3.0, -5.0));
        assert_eq!(-a, Vector2D::new(-1.5, 2.5));
    }

    #[test]
    fn test_distance() {
        assert_approx_eq!(
            Vector2D::new(0i64, 0).distance(Vector2D::new(3, 4)),
            5.0
        );
        assert_approx_eq!(
            Vector2D::new(-1.0, 1.0).distance(Vector2D::new(2.0, -3.0)),
            5.0
        );
        assert_eq!(Vector2D::new(2.0, 2.0).distance(Vector2D::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Vector2D::new(1.9, -1.9).to_int(), Vector2D::new(1, -1));
        assert_eq!(Vector2D::new(3i32, -2).to_float(), Vector2D::new(3.0, -2.0));

        let big = 9_007_199_254_740_993i64;
        assert_eq!(Vector2D::new(big, -big).to_int(), Vector2D::new(big, -big));
    }

    #[test]
    fn test_scale() {
        let v = Vector2D::new(2.0, -3.0);
        let factors = Vector2D::new(10.0, 0.5);
        assert_eq!(v.scale(factors), Vector2D::new(20.0, -1.5));
        assert_eq!(v.scale(factors).unscale(factors), v);
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v = Vector2D::new(1.0, 2.0);
        let na: nalgebra::Vector2<f64> = v.into();
        assert_eq!(na, nalgebra::Vector2::new(1.0, 2.0));
        assert_eq!(Vector2D::from(na), v);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2D::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
