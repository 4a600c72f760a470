//! Greedy decomposition of a curve into maximal straight segments.
//!
//! The driver seeds a fresh recognizer at the cursor, extends it at the
//! front while the predicate holds, snapshots the maximal segment, then
//! re-seeds at the joint (the last included point, which is shared with
//! the next segment, not skipped). An open curve ends at its last point;
//! a cyclic curve ends when the cursor has traversed the full cycle back
//! to the start, with a hard cap of n + 1 segments as a loop guard.
//!
//! Total extension attempts across a whole decomposition are O(n): every
//! accepted point is attempted once, and each segment costs at most one
//! extra rejected attempt.

use std::time::Instant;

use crate::dss::DssRecognizer;
use crate::error::DecomposeError;
use crate::geom::Connectivity;
use crate::segment::{Segment, SegmentComputer};
use crate::sequence::PointSequence;
use crate::trace::{Stats, Trace};

/// Lazy greedy segmenter.
///
/// Yields maximal segments one at a time over a borrowed point
/// sequence. The iterator is finite and not restartable; decompose
/// again to traverse again. Errors (`InvalidInput`,
/// `UnsupportedConnectivity`) are yielded in place and fuse the
/// iterator.
pub struct Segmenter<'a, S: ?Sized> {
    curve: &'a S,
    conn: Connectivity,
    /// Unwrapped index of the next seed (the joint of the previous
    /// segment).
    cursor: usize,
    /// Last unwrapped index to include: n − 1 for an open curve, n for a
    /// cyclic one (the start point again).
    last: usize,
    /// Segment cap for cyclic curves.
    cap: usize,
    done: bool,
    stats: Stats,
}

impl<'a, S: PointSequence + ?Sized> Segmenter<'a, S> {
    pub fn new(curve: &'a S, conn: Connectivity) -> Result<Self, DecomposeError> {
        if curve.is_empty() {
            return Err(DecomposeError::InvalidInput("empty curve".into()));
        }
        let n = curve.len();
        let last = if curve.is_cyclic() && n > 1 { n } else { n - 1 };
        Ok(Segmenter {
            curve,
            conn,
            cursor: 0,
            last,
            cap: n + 1,
            done: false,
            stats: Stats::default(),
        })
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

impl<'a, S: PointSequence + ?Sized> Iterator for Segmenter<'a, S> {
    type Item = Result<Segment, DecomposeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let n = self.curve.len();
        let mut rec = DssRecognizer::new(self.conn, self.cursor, self.curve.point(self.cursor % n));

        let mut i = self.cursor + 1;
        while i <= self.last {
            let p = self.curve.point(i % n);
            self.stats.extension_attempts += 1;
            match rec.extend_front(p) {
                Ok(true) => i += 1,
                Ok(false) => break,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        self.stats.slope_updates += rec.slope_updates();
        self.stats.segments += 1;
        let seg = rec.to_segment();
        self.cursor = seg.end;
        if seg.end >= self.last || self.stats.segments >= self.cap {
            self.done = true;
        }
        Some(Ok(seg))
    }
}

/// The result of a greedy decomposition: ordered maximal segments plus
/// the counters gathered while building them. Immutable once built.
#[derive(Debug, Clone)]
pub struct Decomposition {
    segments: Vec<Segment>,
    stats: Stats,
    curve_len: usize,
    cyclic: bool,
}

impl Decomposition {
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn curve_len(&self) -> usize {
        self.curve_len
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Number of distinct curve points covered: the sum of segment
    /// lengths minus the shared joints (including the wrap joint of a
    /// cyclic decomposition).
    pub fn covered_points(&self) -> usize {
        if self.segments.is_empty() {
            return 0;
        }
        let total: usize = self.segments.iter().map(Segment::len).sum();
        let mut joints = self.segments.len() - 1;
        // A cyclic decomposition whose last segment wrapped back to the
        // start shares that point with the first segment too.
        if self.cyclic && self.segments.last().map_or(false, |s| s.end >= self.curve_len) {
            joints += 1;
        }
        total - joints
    }

    /// Whether the segments tile the curve exactly: every point covered
    /// once, joints counted once.
    pub fn is_tiling(&self) -> bool {
        self.covered_points() == self.curve_len
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Decompose a curve into maximal segments, silently.
pub fn decompose<S>(curve: &S, conn: Connectivity) -> Result<Decomposition, DecomposeError>
where
    S: PointSequence + ?Sized,
{
    let mut trace = Trace::silent();
    decompose_with(curve, conn, &mut trace)
}

/// Decompose a curve, recording counters (and, when the trace is
/// verbose, per-segment progress) into the caller's [`Trace`].
pub fn decompose_with<S>(
    curve: &S,
    conn: Connectivity,
    trace: &mut Trace,
) -> Result<Decomposition, DecomposeError>
where
    S: PointSequence + ?Sized,
{
    let t_start = Instant::now();
    let mut segmenter = Segmenter::new(curve, conn)?;
    let mut segments = Vec::new();
    for result in &mut segmenter {
        let seg = result?;
        if trace.is_verbose() {
            let c = seg.characteristics;
            eprintln!(
                "  Segment     [{}..{}]  a={} b={} mu={} omega={}",
                seg.start, seg.end, c.a, c.b, c.mu, c.omega,
            );
        }
        segments.push(seg);
    }
    let stats = segmenter.stats();
    trace.stats.merge(stats);
    if trace.is_verbose() {
        eprintln!(
            "  Decompose   {} points ({}) -> {} segments, {} attempts, {} slope updates ({}ms)",
            curve.len(),
            conn,
            stats.segments,
            stats.extension_attempts,
            stats.slope_updates,
            t_start.elapsed().as_millis(),
        );
    }
    Ok(Decomposition {
        segments,
        stats,
        curve_len: curve.len(),
        cyclic: curve.is_cyclic(),
    })
}
