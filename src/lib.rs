//! maxseg: greedy decomposition of digital curves into maximal
//! arithmetical digital straight segments (DSS).
//!
//! Feed an ordered sequence of lattice points (open or cyclic) and get
//! back the ordered, gap-free partition into maximal straight pieces,
//! each carrying its exact characteristics (a, b, μ, ω). Recognition is
//! incremental and exact-integer; a whole decomposition costs O(n)
//! extension attempts.
//!
//! # Example
//!
//! ```
//! use maxseg::{decompose, Connectivity, Point};
//!
//! let points = vec![
//!     Point::new(0, 0),
//!     Point::new(1, 0),
//!     Point::new(2, 1),
//!     Point::new(3, 1),
//!     Point::new(4, 2),
//! ];
//! let decomposition = decompose(&points[..], Connectivity::Eight)?;
//! assert_eq!(decomposition.len(), 1);
//! let c = decomposition.segments()[0].characteristics;
//! assert_eq!((c.a, c.b), (1, 2));
//! # Ok::<(), maxseg::DecomposeError>(())
//! ```

#![forbid(unsafe_code)]

mod dss;
mod geom;
mod greedy;
mod segment;
mod sequence;
mod trace;

pub mod error;
pub mod render;

// Re-export kurbo so downstream users get the same version used by
// render::to_bezpath.
pub use kurbo;

pub use dss::DssRecognizer;
pub use error::DecomposeError;
pub use geom::{gcd, Connectivity, Point};
pub use greedy::{decompose, decompose_with, Decomposition, Segmenter};
pub use segment::{Characteristics, Segment, SegmentComputer};
pub use sequence::{Cyclic, PointSequence};
pub use trace::{Stats, Trace};

use rayon::prelude::*;

/// Decompose many independent curves in parallel, one worker per curve.
///
/// Each curve is read-only and owns no state shared with the others, so
/// no locking is involved; results come back in input order.
pub fn decompose_all<S>(
    curves: &[&S],
    conn: Connectivity,
) -> Vec<Result<Decomposition, DecomposeError>>
where
    S: PointSequence + Sync + ?Sized,
{
    curves
        .par_iter()
        .map(|curve| decompose(*curve, conn))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_decomposition_preserves_order() {
        let line: Vec<Point> = (0..100).map(|i| Point::new(i, 0)).collect();
        let zigzag: Vec<Point> = (0..100).map(|i| Point::new(i, i % 2)).collect();
        let curves: Vec<&[Point]> = vec![&line, &zigzag];

        let results = decompose_all(&curves, Connectivity::Eight);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().len(), 1);
        assert_eq!(results[1].as_ref().unwrap().len(), 99);
    }

    #[test]
    fn parallel_errors_stay_per_curve() {
        let good: Vec<Point> = vec![Point::new(0, 0), Point::new(1, 0)];
        let bad: Vec<Point> = Vec::new();
        let curves: Vec<&[Point]> = vec![&good, &bad];

        let results = decompose_all(&curves, Connectivity::Eight);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
