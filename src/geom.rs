//! Shared lattice geometry: points, steps, exact integer helpers.

use std::fmt;

/// A 2D lattice point. Coordinates are exact integers; equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Displacement (dx, dy) from `self` to `other`.
    pub fn step_to(self, other: Point) -> (i64, i64) {
        (other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Adjacency model constraining the unit steps between consecutive
/// curve points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Axis-aligned unit steps only (|dx| + |dy| = 1).
    Four,
    /// King moves: diagonal steps allowed (max(|dx|, |dy|) = 1).
    Eight,
}

impl Connectivity {
    /// Whether (dx, dy) is a single step under this adjacency.
    pub fn is_step(self, dx: i64, dy: i64) -> bool {
        match self {
            Connectivity::Four => dx.abs() + dy.abs() == 1,
            Connectivity::Eight => dx.abs().max(dy.abs()) == 1,
        }
    }

    /// Arithmetic width ω of a digital line of reduced slope (a, b):
    /// max(|a|, |b|) for naive (8-adjacent) lines, |a| + |b| for
    /// standard (4-adjacent) lines.
    pub fn width(self, a: i64, b: i64) -> i64 {
        match self {
            Connectivity::Four => a.abs() + b.abs(),
            Connectivity::Eight => a.abs().max(b.abs()),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Four => write!(f, "4-adjacency"),
            Connectivity::Eight => write!(f, "8-adjacency"),
        }
    }
}

/// Greatest common divisor of absolute values. `gcd(0, 0) = 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(1, 5), 1);
    }

    #[test]
    fn adjacency_steps() {
        assert!(Connectivity::Four.is_step(1, 0));
        assert!(Connectivity::Four.is_step(0, -1));
        assert!(!Connectivity::Four.is_step(1, 1));
        assert!(!Connectivity::Four.is_step(0, 0));

        assert!(Connectivity::Eight.is_step(1, 1));
        assert!(Connectivity::Eight.is_step(-1, 0));
        assert!(!Connectivity::Eight.is_step(2, 0));
        assert!(!Connectivity::Eight.is_step(0, 0));
    }

    #[test]
    fn arithmetic_width() {
        assert_eq!(Connectivity::Eight.width(1, 2), 2);
        assert_eq!(Connectivity::Eight.width(-2, 5), 5);
        assert_eq!(Connectivity::Four.width(1, 2), 3);
        assert_eq!(Connectivity::Four.width(0, 1), 1);
    }
}
