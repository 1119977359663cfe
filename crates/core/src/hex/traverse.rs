//! Multi-cell walks: rings, spirals and lines.

use crate::hex::{Hex, HexDirection, HexNum};

impl<N: HexNum> Hex<N> {
    /// Get every hex exactly `radius` steps from this one, as a closed walk
    /// around the ring.
    ///
    /// The walk starts at the north-east corner of the ring,
    /// `self + (radius, -radius)`, and takes `radius` steps along each of the
    /// six sides. Side `i` steps in direction `ALL[(i + 1) % 6]`, and each hex
    /// is recorded _before_ stepping off of it, so the start corner comes
    /// first.
    ///
    /// **`circle(0)` is empty**, not `[self]`. Any non-positive radius gives
    /// an empty list. If you want the center included for radius 0, use
    /// [Self::spiral_ring] instead.
    pub fn circle(self, radius: i32) -> Vec<Self> {
        if radius <= 0 {
            return Vec::new();
        }

        let steps = radius as usize;
        let r = N::from_i64(radius.into());
        let mut results = Vec::with_capacity(6 * steps);
        let mut hex = self + Self::new(r, -r);
        for side in 0..6 {
            let direction = HexDirection::from_index(side + 1);
            for _ in 0..steps {
                results.push(hex);
                hex = hex.neighbour(direction);
            }
        }
        results
    }

    /// Get a single ring of a spiral, i.e. every hex exactly `radius` steps
    /// from this one. This is the ring walk that [Self::spiral] is built from.
    ///
    /// - `radius < 0` gives an empty list
    /// - `radius == 0` gives just `[self]`
    /// - otherwise, exactly `6 * radius` hexes
    ///
    /// The walk starts from `self` moved `radius` steps East, with the `r`
    /// displacement negated (which is a no-op for East, since its `r` is 0).
    /// Side `i` then walks `radius` steps in direction `ALL[(i + 2) % 6]`,
    /// recording each hex _after_ stepping onto it. That means the first hex
    /// is one step South-West of the East corner, and the East corner itself
    /// comes last.
    pub fn spiral_ring(self, radius: i32) -> Vec<Self> {
        if radius < 0 {
            return Vec::new();
        }
        if radius == 0 {
            return vec![self];
        }

        let steps = radius as usize;
        let scaled = HexDirection::East.offset::<N>() * N::from_i64(radius.into());
        let mut hex = self + Self::new(scaled.q, -scaled.r);
        let mut results = Vec::with_capacity(6 * steps);
        for side in 0..6 {
            let direction = HexDirection::from_index(side).rotated(2);
            for _ in 0..steps {
                hex = hex.neighbour(direction);
                results.push(hex);
            }
        }
        results
    }

    /// Get this hex followed by every ring around it, out to `radius`, in
    /// order of increasing radius. The result has `1 + 3 * radius *
    /// (radius + 1)` hexes. A non-positive radius gives just `[self]`.
    pub fn spiral(self, radius: i32) -> Vec<Self> {
        let mut results = vec![self];
        for ring in 1..=radius {
            results.extend(self.spiral_ring(ring));
        }
        results
    }

    /// Draw a line from this hex to another, via linear interpolation in
    /// axial space. With `n` as the (rounded) distance between the two, the
    /// line has `n + 1` hexes, evenly spaced from `self` to `other`.
    ///
    /// Each sample is converted back to `N` with a plain cast. For integer
    /// hexes that **truncates toward zero** rather than rounding to the
    /// nearest cell, so the intermediate hexes can differ from what
    /// [Self::round] would give. Lines between equal hexes are just
    /// `[self]`.
    pub fn line_to(self, other: Self) -> Vec<Self> {
        let distance = self.distance(other).round() as usize;
        if distance == 0 {
            return vec![self];
        }

        let (q1, r1) = (self.q.as_f64(), self.r.as_f64());
        let (q2, r2) = (other.q.as_f64(), other.r.as_f64());
        (0..=distance)
            .map(|i| {
                let t = i as f64 / distance as f64;
                Self::new(
                    N::from_f64(q1 * (1.0 - t) + q2 * t),
                    N::from_f64(r1 * (1.0 - t) + r2 * t),
                )
            })
            .collect()
    }
}
