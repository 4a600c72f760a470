use thiserror::Error;

use crate::geom::{Connectivity, Point};

/// Errors that can occur during curve decomposition.
///
/// A failed extension attempt (the arithmetic predicate no longer holds)
/// is *not* an error: it is the normal end-of-segment signal and stays a
/// boolean inside the driver. Only malformed input and unrealizable
/// steps use this channel. Internal invariant violations are a defect
/// and panic instead of being reported here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecomposeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("step {from} -> {to} is not realizable under {connectivity}")]
    UnsupportedConnectivity {
        from: Point,
        to: Point,
        connectivity: Connectivity,
    },
}
