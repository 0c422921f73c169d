//! Numeric ordering and 2D geometry foundations.
//!
//! Two independent pillars:
//! - `num`: a total order over mixed numeric representations (machine
//!   integers, IEEE-754 floats, arbitrary-precision integers and exact
//!   rationals) with an explicit NaN/infinity policy, plus interval and
//!   range types built on that order.
//! - `geom`: immutable 2D value types (`Vector`, `Line`, `Polyline`,
//!   `Arc`) and their classification/intersection algorithms.
//!
//! All types are plain immutable values; nothing in this crate holds
//! shared mutable state, so every type may be read from any number of
//! threads without synchronization.

pub mod geom;
pub mod num;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, PlanarError>;

/// Crate-wide error type. Every fallible operation reports to its
/// immediate caller; nothing is retried or recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum PlanarError {
    /// A range or interval was given `min > max`.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A numeric value with no exact rational form reached the
    /// arbitrary-precision comparison fallback.
    #[error("unsupported numeric value: {0}")]
    UnsupportedNumeric(String),

    /// A reduction over zero values.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A polyline needs at least two vertices.
    #[error("a polyline requires a minimum of two vertices, got {0}")]
    TooFewVertices(usize),

    /// Operation not part of the supported contract.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        Arc, CentroidKind, Intersection, Line, LineStatus, PointStatus, Polyline, Vector,
    };
    pub use crate::num::{compare, max_of, min_of, Infinity, Interval, Num, NumRange};
    pub use crate::{PlanarError, Result};
}
