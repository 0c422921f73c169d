//! Immutable 2D geometric primitives.
//!
//! Purpose
//! - `Vector`: point/direction with arithmetic, rotation, angles.
//! - `Line`: directed segment (doubling as its infinite extension),
//!   point classification, intersection, normals.
//! - `Polyline`: open or closed vertex chain with length/area/winding,
//!   Jordan containment, and edge-wise intersection queries.
//! - `Arc`: circular/elliptical arc, including the bulge construction
//!   used by CAD polyline vertices.
//!
//! Equality everywhere is exact component-wise f64 equality; tolerance
//! is applied only where an algorithm states it explicitly (the
//! intersection epsilon).

pub mod angle;
pub mod arc;
pub mod line;
pub mod polyline;
pub mod vector;

pub use arc::Arc;
pub use line::{Intersection, Line, LineBuilder, LineStatus, PointStatus};
pub use polyline::{CentroidKind, Polyline, PolylineBuilder};
pub use vector::Vector;
