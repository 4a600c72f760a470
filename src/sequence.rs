//! Input contract for curve sources.
//!
//! The decomposition driver never owns the curve: it reads lattice
//! points on demand through the [`PointSequence`] trait and keeps only a
//! borrowed view. Implementations may generate points lazily; nothing is
//! ever copied or materialized by the driver.

use crate::geom::Point;

/// An ordered sequence of lattice points, optionally cyclic.
///
/// Indices run from 0 to `len() - 1`; on a cyclic sequence the driver
/// wraps indices modulo `len()` itself, so `point` is never called out
/// of range.
pub trait PointSequence {
    /// Number of distinct points in the sequence.
    fn len(&self) -> usize;

    /// Point at index `i`, with `i < len()`.
    fn point(&self, i: usize) -> Point;

    /// Whether the sequence describes a closed curve.
    fn is_cyclic(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PointSequence for [Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn point(&self, i: usize) -> Point {
        self[i]
    }
}

impl PointSequence for Vec<Point> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn point(&self, i: usize) -> Point {
        self[i]
    }
}

impl<S: PointSequence + ?Sized> PointSequence for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn point(&self, i: usize) -> Point {
        (**self).point(i)
    }

    fn is_cyclic(&self) -> bool {
        (**self).is_cyclic()
    }
}

/// Wrapper marking a sequence as cyclic (a closed curve).
///
/// The last point is understood to step back to the first one; the
/// driver follows that wrap step when decomposing.
#[derive(Debug, Clone, Copy)]
pub struct Cyclic<S>(pub S);

impl<S: PointSequence> PointSequence for Cyclic<S> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn point(&self, i: usize) -> Point {
        self.0.point(i)
    }

    fn is_cyclic(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_sequence_is_open() {
        let pts = vec![Point::new(0, 0), Point::new(1, 0)];
        let seq: &[Point] = &pts;
        assert_eq!(PointSequence::len(seq), 2);
        assert_eq!(seq.point(1), Point::new(1, 0));
        assert!(!seq.is_cyclic());
    }

    #[test]
    fn cyclic_wrapper_sets_flag() {
        let pts = vec![Point::new(0, 0), Point::new(1, 0)];
        let seq = Cyclic(&pts[..]);
        assert!(seq.is_cyclic());
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.point(0), Point::new(0, 0));
    }

    /// A sequence that computes its points on demand.
    struct Generated(usize);

    impl PointSequence for Generated {
        fn len(&self) -> usize {
            self.0
        }

        fn point(&self, i: usize) -> Point {
            Point::new(i as i64, 0)
        }
    }

    #[test]
    fn generated_sequence_is_lazy() {
        let seq = Generated(1_000_000);
        assert_eq!(seq.point(999_999), Point::new(999_999, 0));
    }
}
