//! Incremental arithmetical DSS recognition.
//!
//! Online recognition of Arithmetical Digital Straight Segments in the
//! Debled-Rennesson–Reveillès style: a segment of characteristics
//! (a, b, μ, ω) contains exactly the lattice points whose remainder
//! r = a·x − b·y lies in [μ, μ + ω − 1]. Growing the segment by one
//! point is O(1):
//!
//! 1. **Interior** — μ ≤ r ≤ μ + ω − 1: accept as-is. When r hits a
//!    bound, the new point becomes the last upper (r = μ) or lower
//!    (r = μ + ω − 1) leaning point.
//! 2. **Weakly exterior** — r = μ − 1 or r = μ + ω: the point misses the
//!    line by exactly one unit. The slope is recombined from the vector
//!    joining the opposite-side first leaning point to the new point (a
//!    Stern–Brocot mediant refinement); the new characteristics are
//!    valid for every point already in the segment, so the extension
//!    commits.
//! 3. **Strongly exterior** — anything further out: reject, state
//!    untouched. The caller closes the segment.
//!
//! The four leaning points (upper/lower × first/last) are plain fields,
//! refreshed in O(1) on each commit; no history structure is kept.

use crate::error::DecomposeError;
use crate::geom::{gcd, Connectivity, Point};
use crate::segment::{Characteristics, SegmentComputer};

/// Decision for one candidate point, computed before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    /// Second point of the segment: fixes the initial slope.
    Second,
    /// Predicate holds under the current characteristics.
    Interior(i64),
    /// r = μ − 1: recombine the slope around the upper leaning points.
    UpperExterior,
    /// r = μ + ω: recombine the slope around the lower leaning points.
    LowerExterior,
    /// Off by more than one unit, or a step the slope cannot absorb.
    Reject,
}

/// Incremental recognizer for arithmetical digital straight segments.
///
/// State: the characteristics, the four leaning points, the first/last
/// points with their sequence indices, and the point count. After every
/// committed mutation every recognized point satisfies
/// μ ≤ a·x − b·y ≤ μ + ω − 1 for the current characteristics; a failed
/// extension leaves the state untouched.
#[derive(Debug, Clone)]
pub struct DssRecognizer {
    conn: Connectivity,
    a: i64,
    b: i64,
    mu: i64,
    omega: i64,
    first: Point,
    last: Point,
    first_index: usize,
    last_index: usize,
    // Leaning points: upper (r = μ) and lower (r = μ + ω − 1),
    // first/last along the segment.
    uf: Point,
    ul: Point,
    lf: Point,
    ll: Point,
    count: usize,
    updates: usize,
}

impl DssRecognizer {
    /// A fresh one-point segment anchored at `p`, recorded at `index`.
    pub fn new(conn: Connectivity, index: usize, p: Point) -> Self {
        DssRecognizer {
            conn,
            a: 0,
            b: 0,
            mu: 0,
            omega: 0,
            first: p,
            last: p,
            first_index: index,
            last_index: index,
            uf: p,
            ul: p,
            lf: p,
            ll: p,
            count: 1,
            updates: 0,
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        self.conn
    }

    /// Number of recognized points.
    pub fn point_count(&self) -> usize {
        self.count
    }

    /// Slope recombinations committed so far in this recognizer's life.
    pub fn slope_updates(&self) -> usize {
        self.updates
    }

    /// Membership of a point in the current digital line.
    pub fn contains(&self, p: Point) -> bool {
        self.parameters().contains(p)
    }

    /// The leaning points (upper-first, upper-last, lower-first,
    /// lower-last). Meaningful once the segment has two points.
    pub fn leaning_points(&self) -> [Point; 4] {
        [self.uf, self.ul, self.lf, self.ll]
    }

    fn remainder(&self, p: Point) -> i64 {
        self.a * p.x - self.b * p.y
    }

    /// Whether a unit step can continue a segment of the current slope.
    ///
    /// A DSS only ever uses the two steps of its slope's octant (naive:
    /// a cardinal step and the adjacent diagonal; standard: the two
    /// cardinal steps of the quadrant). While the slope is still axis-
    /// aligned or diagonal, the neighboring steps that would refine it
    /// are allowed too; the remainder test then decides. `s` points in
    /// curve order, back to front.
    fn compatible_step(&self, s: (i64, i64)) -> bool {
        let sa = self.a.signum();
        let sb = self.b.signum();
        match self.conn {
            Connectivity::Eight => {
                if self.a == 0 {
                    s.0 == sb
                } else if self.b == 0 {
                    s.1 == sa
                } else if self.a.abs() == self.b.abs() {
                    s == (sb, sa) || s == (sb, 0) || s == (0, sa)
                } else if self.b.abs() > self.a.abs() {
                    s == (sb, sa) || s == (sb, 0)
                } else {
                    s == (sb, sa) || s == (0, sa)
                }
            }
            Connectivity::Four => {
                if self.a == 0 {
                    s == (sb, 0) || s == (0, 1) || s == (0, -1)
                } else if self.b == 0 {
                    s == (0, sa) || s == (1, 0) || s == (-1, 0)
                } else {
                    s == (sb, 0) || s == (0, sa)
                }
            }
        }
    }

    /// Validate a candidate step and classify the remainder of `p`.
    /// `s` is the displacement in curve order, from `from` to `to` (for
    /// a back extension, the step from `p` into the segment).
    fn classify(
        &self,
        s: (i64, i64),
        p: Point,
        from: Point,
        to: Point,
    ) -> Result<Extension, DecomposeError> {
        if s == (0, 0) {
            return Err(DecomposeError::InvalidInput(format!(
                "repeated consecutive point {p}"
            )));
        }
        if !self.conn.is_step(s.0, s.1) {
            return Err(DecomposeError::UnsupportedConnectivity {
                from,
                to,
                connectivity: self.conn,
            });
        }
        if self.count == 1 {
            return Ok(Extension::Second);
        }
        if !self.compatible_step(s) {
            return Ok(Extension::Reject);
        }
        let r = self.remainder(p);
        if self.mu <= r && r <= self.mu + self.omega - 1 {
            Ok(Extension::Interior(r))
        } else if r == self.mu - 1 {
            Ok(Extension::UpperExterior)
        } else if r == self.mu + self.omega {
            Ok(Extension::LowerExterior)
        } else {
            Ok(Extension::Reject)
        }
    }

    fn probe_front(&self, p: Point) -> Result<Extension, DecomposeError> {
        self.classify(self.last.step_to(p), p, self.last, p)
    }

    fn probe_back(&self, p: Point) -> Result<Extension, DecomposeError> {
        self.classify(p.step_to(self.first), p, p, self.first)
    }

    /// Invariant check after every commit. A violation means the
    /// recognizer corrupted its own state, which is an implementation
    /// defect: it panics and is never reported as a recoverable error.
    fn assert_consistent(&self) {
        if self.count < 2 {
            return;
        }
        let c = self.parameters();
        let lower = self.mu + self.omega - 1;
        let ok = gcd(self.a, self.b) == 1
            && c.remainder(self.uf) == self.mu
            && c.remainder(self.ul) == self.mu
            && c.remainder(self.lf) == lower
            && c.remainder(self.ll) == lower
            && c.contains(self.first)
            && c.contains(self.last);
        if !ok {
            panic!(
                "DSS state corruption: ({}, {}, {}, {}) violates its own invariant over [{}..{}]",
                self.a, self.b, self.mu, self.omega, self.first_index, self.last_index
            );
        }
    }
}

impl SegmentComputer for DssRecognizer {
    fn init(&mut self, index: usize, p: Point) {
        *self = DssRecognizer::new(self.conn, index, p);
    }

    fn extend_front(&mut self, p: Point) -> Result<bool, DecomposeError> {
        match self.probe_front(p)? {
            Extension::Reject => return Ok(false),
            Extension::Second => {
                let (dx, dy) = self.last.step_to(p);
                self.a = dy;
                self.b = dx;
                self.omega = self.conn.width(self.a, self.b);
                self.mu = self.remainder(p);
                self.uf = self.first;
                self.lf = self.first;
                self.ul = p;
                self.ll = p;
            }
            Extension::Interior(r) => {
                if r == self.mu {
                    self.ul = p;
                }
                if r == self.mu + self.omega - 1 {
                    self.ll = p;
                }
            }
            Extension::UpperExterior => {
                self.a = p.y - self.uf.y;
                self.b = p.x - self.uf.x;
                self.omega = self.conn.width(self.a, self.b);
                self.ul = p;
                self.lf = self.ll;
                self.mu = self.remainder(p);
                self.updates += 1;
            }
            Extension::LowerExterior => {
                self.a = p.y - self.lf.y;
                self.b = p.x - self.lf.x;
                self.omega = self.conn.width(self.a, self.b);
                self.ll = p;
                self.uf = self.ul;
                self.mu = self.remainder(self.uf);
                self.updates += 1;
            }
        }
        self.last = p;
        self.last_index += 1;
        self.count += 1;
        self.assert_consistent();
        Ok(true)
    }

    fn extend_back(&mut self, p: Point) -> Result<bool, DecomposeError> {
        debug_assert!(self.first_index > 0, "extend_back past index 0");
        match self.probe_back(p)? {
            Extension::Reject => return Ok(false),
            Extension::Second => {
                let (dx, dy) = p.step_to(self.first);
                self.a = dy;
                self.b = dx;
                self.omega = self.conn.width(self.a, self.b);
                self.mu = self.remainder(p);
                self.uf = p;
                self.lf = p;
                self.ul = self.last;
                self.ll = self.last;
            }
            Extension::Interior(r) => {
                if r == self.mu {
                    self.uf = p;
                }
                if r == self.mu + self.omega - 1 {
                    self.lf = p;
                }
            }
            Extension::UpperExterior => {
                self.a = self.ul.y - p.y;
                self.b = self.ul.x - p.x;
                self.omega = self.conn.width(self.a, self.b);
                self.uf = p;
                self.ll = self.lf;
                self.mu = self.remainder(p);
                self.updates += 1;
            }
            Extension::LowerExterior => {
                self.a = self.ll.y - p.y;
                self.b = self.ll.x - p.x;
                self.omega = self.conn.width(self.a, self.b);
                self.lf = p;
                self.ul = self.uf;
                self.mu = self.remainder(self.uf);
                self.updates += 1;
            }
        }
        self.first = p;
        self.first_index -= 1;
        self.count += 1;
        self.assert_consistent();
        Ok(true)
    }

    fn is_extendable_front(&self, p: Point) -> Result<bool, DecomposeError> {
        Ok(!matches!(self.probe_front(p)?, Extension::Reject))
    }

    fn is_extendable_back(&self, p: Point) -> Result<bool, DecomposeError> {
        Ok(!matches!(self.probe_back(p)?, Extension::Reject))
    }

    fn parameters(&self) -> Characteristics {
        Characteristics {
            a: self.a,
            b: self.b,
            mu: self.mu,
            omega: self.omega,
        }
    }

    fn range(&self) -> (usize, usize) {
        (self.first_index, self.last_index)
    }
}
