//! Polyline export of decompositions for downstream consumers.
//!
//! Converts the joints of a [`Decomposition`] into a `kurbo::BezPath`
//! so that renderers, polygon simplifiers and curve re-encoders can
//! consume the result without knowing about segment records.

use kurbo::BezPath;

use crate::greedy::Decomposition;
use crate::sequence::PointSequence;

/// Build the joint polyline of a decomposition as a `kurbo::BezPath`.
///
/// One vertex per segment boundary: the first segment's start, then
/// every segment's end. A cyclic decomposition closes the path instead
/// of repeating the start vertex.
pub fn to_bezpath<S>(curve: &S, decomposition: &Decomposition) -> BezPath
where
    S: PointSequence + ?Sized,
{
    let mut path = BezPath::new();
    let segments = decomposition.segments();
    if segments.is_empty() {
        return path;
    }

    let n = curve.len();
    let vertex = |i: usize| {
        let p = curve.point(i % n);
        kurbo::Point::new(p.x as f64, p.y as f64)
    };

    path.move_to(vertex(segments[0].start));
    let last = segments.len() - 1;
    for (k, seg) in segments.iter().enumerate() {
        let wrapped_home = decomposition.is_cyclic() && k == last && seg.end % n == segments[0].start;
        if wrapped_home {
            path.close_path();
        } else {
            path.line_to(vertex(seg.end));
        }
    }
    path
}
