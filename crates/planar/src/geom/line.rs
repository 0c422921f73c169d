use std::cmp::Ordering;

use nalgebra::{Matrix2, Vector2};

use super::vector::Vector;
use crate::num::NumRange;
use crate::Result;

const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
const PI: f64 = std::f64::consts::PI;

/// Tolerance for the parallel/identical decision and the point-on-line
/// test inside `intersection`.
const EPSILON: f64 = 1e-10;

/// Retry budget for the randomized `normal` sampling before the
/// deterministic perpendicular fallback kicks in.
const NORMAL_MAX_DRAWS: usize = 16;

/// Immutable directed segment from `origin` to `destination`.
///
/// Depending on the operation, a `Line` also stands for its infinite
/// extension: `slope`, `angle*`, `orthogonal`, `normal` and `distance`
/// treat it as a full line; `classify`, `contains` and the
/// `SegmentIntersects` status treat it as a bounded segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    origin: Vector,
    destination: Vector,
}

/// Position of a point relative to the directed segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointStatus {
    /// Left of the infinite carrier line.
    Left,
    /// Right of the infinite carrier line.
    Right,
    /// On the carrier, before the origin.
    Behind,
    /// On the carrier, past the destination.
    Beyond,
    /// Exactly the origin.
    Origin,
    /// Exactly the destination.
    Destination,
    /// On the segment, strictly between the endpoints.
    Between,
}

/// How two lines relate to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStatus {
    /// The numerical solve failed; no classification possible.
    Deficient,
    /// Same carrier line.
    Identical,
    /// Parallel, distinct carriers.
    Parallel,
    /// The infinite carriers intersect, outside at least one segment.
    LineIntersects,
    /// The segments themselves intersect (implies the carriers do).
    SegmentIntersects,
}

/// Result record of an intersection query; a fresh value per query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub line1: Line,
    pub line2: Line,
    pub point: Option<Vector>,
    pub status: LineStatus,
}

/// Staged construction: `Line::with_origin(o).destination(d)` or
/// `.direction(v)`.
#[derive(Clone, Copy, Debug)]
pub struct LineBuilder {
    origin: Vector,
}

impl LineBuilder {
    pub fn destination(self, destination: Vector) -> Line {
        Line::new(self.origin, destination)
    }

    pub fn direction(self, direction: Vector) -> Line {
        Line::new(self.origin, self.origin + direction)
    }
}

/// Intersection angle of two lines from their slopes:
/// `atan((m1 - m2) / (1 + m1 m2))`, with explicit handling of equal,
/// infinite, and perpendicular slopes. The result is normalized to be
/// non-negative (negative angles get π added).
pub fn angle_of_intersection(m1: f64, m2: f64) -> f64 {
    let mut ret = ((m1 - m2) / (1.0 + m1 * m2)).atan();
    if m1.total_cmp(&m2) == Ordering::Equal {
        ret = 0.0;
    } else if ret.is_nan() {
        if (m1.is_infinite() && m2 == 0.0)
            || (m2.is_infinite() && m1 == 0.0)
            || m1.total_cmp(&(-1.0 / m2)) == Ordering::Equal
            || m2.total_cmp(&(-1.0 / m1)) == Ordering::Equal
        {
            ret = HALF_PI;
        } else if m1.is_infinite() {
            ret = HALF_PI - m2.atan();
        } else if m2.is_infinite() {
            ret = HALF_PI - m1.atan();
        }
    }
    if ret < 0.0 {
        ret += PI;
    }
    ret
}

impl Line {
    pub fn new(origin: Vector, destination: Vector) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub fn with_origin(origin: Vector) -> LineBuilder {
        LineBuilder { origin }
    }

    #[inline]
    pub fn origin(&self) -> Vector {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Vector {
        self.destination
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.destination - self.origin
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.origin.distance(self.destination)
    }

    /// Slope `dy/dx`; ±∞ for vertical lines, NaN for a degenerate
    /// point line.
    pub fn slope(&self) -> f64 {
        (self.destination.y - self.origin.y) / (self.destination.x - self.origin.x)
    }

    /// Angle against the x-axis, in `[0, π)`.
    pub fn angle(&self) -> f64 {
        angle_of_intersection(self.slope(), 0.0)
    }

    /// Angle against another line, in `[0, π)`.
    pub fn angle_to(&self, other: &Line) -> f64 {
        angle_of_intersection(self.slope(), other.slope())
    }

    /// Component of `v` orthogonal to this line: `v` minus its foot of
    /// perpendicular on the carrier.
    pub fn orthogonal(&self, v: Vector) -> Vector {
        let a = self.direction();
        let l = (v - self.origin).dot(a) / a.dot(a);
        let foot = self.origin + a * l;
        v - foot
    }

    /// Unit normal of the line, with a consistent side choice: for a
    /// rising line the normal's x is non-positive, for a falling line
    /// it is non-negative.
    ///
    /// Sampled by projecting random probe points onto the carrier and
    /// normalizing the rejection; a probe that lands on the carrier
    /// normalizes to NaN and is redrawn. After the retry budget the
    /// deterministic perpendicular of the direction is used instead,
    /// which feeds the identical sign fixup.
    pub fn normal(&self) -> Vector {
        let mut candidate = None;
        for _ in 0..NORMAL_MAX_DRAWS {
            let probe = Vector::random_range(1.0, 100_000.0);
            let n = self.orthogonal(probe).normalize();
            if n.x.is_nan() || n.y.is_nan() {
                continue;
            }
            candidate = Some(n);
            break;
        }
        let mut normal = candidate.unwrap_or_else(|| {
            let d = self.direction();
            Vector::new(-d.y, d.x).normalize()
        });
        if self.origin.x < self.destination.x {
            if self.origin.y < self.destination.y && normal.x > 0.0 {
                normal = -normal;
            }
        } else if self.origin.y > self.destination.y && normal.x < 0.0 {
            normal = -normal;
        }
        normal
    }

    /// True iff `v` lies on the segment, endpoints included.
    pub fn contains(&self, v: Vector) -> bool {
        matches!(
            self.classify(v),
            PointStatus::Origin | PointStatus::Destination | PointStatus::Between
        )
    }

    /// True iff `v` equals one of the two endpoints.
    pub fn contains_vector(&self, v: Vector) -> bool {
        self.origin == v || self.destination == v
    }

    /// Classifies `v` relative to the directed segment: the sign of the
    /// cross product against the direction decides left/right; on the
    /// carrier, the projection onto the direction separates behind,
    /// beyond, the endpoints, and between.
    pub fn classify(&self, v: Vector) -> PointStatus {
        let a = self.direction();
        let b = v - self.origin;
        let sa = a.determinant(b);
        if sa > 0.0 {
            return PointStatus::Left;
        }
        if sa < 0.0 {
            return PointStatus::Right;
        }
        if a.x * b.x < 0.0 || a.y * b.y < 0.0 {
            return PointStatus::Behind;
        }
        if a.length() < b.length() {
            return PointStatus::Beyond;
        }
        if self.origin == v {
            return PointStatus::Origin;
        }
        if self.destination == v {
            return PointStatus::Destination;
        }
        PointStatus::Between
    }

    /// Point at parameter `t` on the carrier, `P(t) = origin + t·(d-o)`.
    /// `t` outside `[0, 1]` extrapolates past the endpoints.
    pub fn subdivide(&self, t: f64) -> Vector {
        self.origin + self.direction() * t
    }

    /// Full intersection classification against `other`.
    ///
    /// Parallel/identical is decided on the determinant of the
    /// normalized directions against [`EPSILON`]; otherwise the 2×2
    /// system of the two carrier equations is solved and the point is
    /// range-checked against both segments' bounding intervals to
    /// upgrade `LineIntersects` to `SegmentIntersects`. A failed solve
    /// degrades to `Deficient` instead of an error: an intersection
    /// query always produces a classifiable record.
    pub fn intersection(&self, other: &Line) -> Intersection {
        let (point, status) = match self.solve_intersection(other) {
            Ok(r) => r,
            Err(_) => (None, LineStatus::Deficient),
        };
        Intersection {
            line1: *self,
            line2: *other,
            point,
            status,
        }
    }

    fn solve_intersection(&self, other: &Line) -> Result<(Option<Vector>, LineStatus)> {
        let dir1 = self.direction().normalize();
        let dir2 = other.direction().normalize();
        let det = dir1.determinant(dir2);
        if det.abs() < EPSILON {
            // Linearly dependent directions: same carrier iff the other
            // origin is on this carrier.
            let status = if self.distance(other.origin) < EPSILON {
                LineStatus::Identical
            } else {
                LineStatus::Parallel
            };
            return Ok((None, status));
        }
        // origin1 + t·dir1 = origin2 + λ·dir2, solved for (t, λ).
        let a = Matrix2::new(dir1.x, -dir2.x, dir1.y, -dir2.y);
        let rhs = Vector2::new(
            other.origin.x - self.origin.x,
            other.origin.y - self.origin.y,
        );
        let inv = match a.try_inverse() {
            Some(m) => m,
            None => return Ok((None, LineStatus::Deficient)),
        };
        let solution = inv * rhs;
        let lambda = solution[1];
        let point = Vector::new(
            other.origin.x + lambda * dir2.x,
            other.origin.y + lambda * dir2.y,
        );
        let r1x = span(self.origin.x, self.destination.x)?;
        let r1y = span(self.origin.y, self.destination.y)?;
        let r2x = span(other.origin.x, other.destination.x)?;
        let r2y = span(other.origin.y, other.destination.y)?;
        let status = if r1x.contains(&point.x.into())?
            && r1y.contains(&point.y.into())?
            && r2x.contains(&point.x.into())?
            && r2y.contains(&point.y.into())?
        {
            LineStatus::SegmentIntersects
        } else {
            LineStatus::LineIntersects
        };
        Ok((Some(point), status))
    }

    /// Distance from `v` to the carrier line.
    pub fn distance(&self, v: Vector) -> f64 {
        self.orthogonal(v).length()
    }
}

fn span(a: f64, b: f64) -> Result<NumRange> {
    NumRange::closed(a.min(b), a.max(b))
}
