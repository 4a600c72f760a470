//! Segment records and the segment-computer capability.

use crate::error::DecomposeError;
use crate::geom::Point;

/// DSS characteristics (a, b, μ, ω).
///
/// (a, b) is the reduced direction of the digital line, gcd(|a|, |b|) = 1,
/// the direction vector being (b, a). A point P = (x, y) belongs to the
/// line iff μ ≤ a·x − b·y ≤ μ + ω − 1: the remainder takes exactly ω
/// values. ω is max(|a|, |b|) for naive (8-adjacent) lines and
/// |a| + |b| for standard (4-adjacent) lines.
///
/// A one-point segment is degenerate: (0, 0, 0, 0), matching no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Characteristics {
    pub a: i64,
    pub b: i64,
    pub mu: i64,
    pub omega: i64,
}

impl Characteristics {
    pub const DEGENERATE: Characteristics = Characteristics {
        a: 0,
        b: 0,
        mu: 0,
        omega: 0,
    };

    /// Remainder a·x − b·y of a point.
    pub fn remainder(&self, p: Point) -> i64 {
        self.a * p.x - self.b * p.y
    }

    /// Membership test against the arithmetic predicate.
    pub fn contains(&self, p: Point) -> bool {
        let r = self.remainder(p);
        self.mu <= r && r <= self.mu + self.omega - 1
    }
}

/// An immutable snapshot of a maximal segment: the recognized index
/// range and its final characteristics.
///
/// `start` and `end` are inclusive indices into the source sequence. On
/// a cyclic curve the range is unwrapped: `end` may exceed `len − 1` and
/// indexes modulo the curve length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub characteristics: Characteristics,
}

impl Segment {
    /// Number of points covered, both endpoints included.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A segment always holds at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Unwrapped indices covered by the segment.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Capability of an incremental segment recognizer.
///
/// Any conforming type can be driven to maximality by the greedy
/// decomposition driver. Extension outcomes are three-way:
///
/// - `Ok(true)` — the enlarged range satisfies the predicate; the new
///   state is committed.
/// - `Ok(false)` — the predicate would break; the state is left exactly
///   as it was. This is the normal end-of-segment signal, not an error.
/// - `Err(_)` — exceptional input (zero step, displacement the declared
///   adjacency cannot realize).
pub trait SegmentComputer {
    /// Reset to a single-point segment anchored at `p`, recorded at
    /// sequence index `index`. Always succeeds.
    fn init(&mut self, index: usize, p: Point);

    /// Try to grow the recognized range by one point at the front.
    fn extend_front(&mut self, p: Point) -> Result<bool, DecomposeError>;

    /// Try to grow the recognized range by one point at the back.
    ///
    /// The caller must not extend back past index 0.
    fn extend_back(&mut self, p: Point) -> Result<bool, DecomposeError>;

    /// Same decision as [`extend_front`](Self::extend_front) without
    /// committing anything.
    fn is_extendable_front(&self, p: Point) -> Result<bool, DecomposeError>;

    /// Same decision as [`extend_back`](Self::extend_back) without
    /// committing anything.
    fn is_extendable_back(&self, p: Point) -> Result<bool, DecomposeError>;

    /// Current characteristics. O(1).
    fn parameters(&self) -> Characteristics;

    /// Inclusive (start, end) index range of the recognized points. O(1).
    fn range(&self) -> (usize, usize);

    /// Snapshot the current state as an immutable segment record.
    fn to_segment(&self) -> Segment {
        let (start, end) = self.range();
        Segment {
            start,
            end,
            characteristics: self.parameters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_interval_holds_omega_values() {
        // Naive line of slope 1/2: r = x - 2y in {0, 1}.
        let c = Characteristics {
            a: 1,
            b: 2,
            mu: 0,
            omega: 2,
        };
        assert!(c.contains(Point::new(0, 0)));
        assert!(c.contains(Point::new(1, 0)));
        assert!(c.contains(Point::new(2, 1)));
        assert!(!c.contains(Point::new(0, 1)));
        assert!(!c.contains(Point::new(2, 0)));
    }

    #[test]
    fn degenerate_matches_nothing() {
        assert!(!Characteristics::DEGENERATE.contains(Point::new(0, 0)));
    }

    #[test]
    fn segment_len_counts_endpoints() {
        let seg = Segment {
            start: 3,
            end: 7,
            characteristics: Characteristics::DEGENERATE,
        };
        assert_eq!(seg.len(), 5);
        assert_eq!(seg.indices().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
    }
}
