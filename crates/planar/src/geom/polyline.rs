use super::line::{Intersection, Line};
use super::vector::Vector;
use crate::{PlanarError, Result};

/// Immutable chain of vertices, open or closed.
///
/// Several operations assume a polygon regardless of the `closed` flag:
/// `area`, `is_ccw`, `contains` and `centroid_by(AreaWeighted)` always
/// run over the closing edge back to the first vertex. Only `length`
/// and the intersection queries respect the flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    vertices: Vec<Vector>,
    closed: bool,
}

/// Centroid algorithm selector for [`Polyline::centroid_by`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CentroidKind {
    /// Plain average of the vertices. Cheap, exact for point clouds,
    /// biased for polygons with unevenly spaced vertices.
    #[default]
    VertexAverage,
    /// Area-weighted polygon centroid. Requires a non-zero area.
    AreaWeighted,
}

impl Polyline {
    pub fn new(vertices: Vec<Vector>, closed: bool) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(PlanarError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices, closed })
    }

    pub fn open(vertices: Vec<Vector>) -> Result<Self> {
        Self::new(vertices, false)
    }

    pub fn closed(vertices: Vec<Vector>) -> Result<Self> {
        Self::new(vertices, true)
    }

    pub fn start_at(v: Vector) -> PolylineBuilder {
        PolylineBuilder { vertices: vec![v] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.vertices.iter()
    }

    /// Number of edges walked by the flag-respecting operations.
    fn edge_count(&self) -> usize {
        if self.closed {
            self.len()
        } else {
            self.len() - 1
        }
    }

    /// Edge `i`, wrapping back to the first vertex for the closing edge.
    fn edge(&self, i: usize) -> Line {
        let n = self.len();
        Line::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Total edge length; includes the closing edge only when closed.
    pub fn length(&self) -> f64 {
        (0..self.edge_count())
            .map(|i| self.edge(i).length())
            .sum()
    }

    /// Absolute polygon area by the trapezoid formula.
    ///
    /// The ring is always closed for this sum, even for an open
    /// polyline; an open chain gets the area of its implicit polygon.
    pub fn area(&self) -> f64 {
        let sum: f64 = self
            .ring_edges()
            .map(|(a, b)| (a.y + b.y) * (a.x - b.x))
            .sum();
        (sum / 2.0).abs()
    }

    /// Winding test over the (always closed) ring. A degenerate
    /// two-point polyline counts as counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        let sum: f64 = self
            .ring_edges()
            .map(|(a, b)| (b.x - a.x) * (b.y + a.y))
            .sum();
        sum <= 0.0
    }

    fn ring_edges(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        let n = self.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// This polyline in counter-clockwise orientation.
    pub fn ccw(&self) -> Polyline {
        if self.is_ccw() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// This polyline in clockwise orientation.
    pub fn cw(&self) -> Polyline {
        if self.is_ccw() {
            self.reverse()
        } else {
            self.clone()
        }
    }

    /// Same vertices in reverse order, keeping the closed flag.
    pub fn reverse(&self) -> Polyline {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polyline {
            vertices,
            closed: self.closed,
        }
    }

    /// Centroid with the default [`CentroidKind::VertexAverage`].
    pub fn centroid(&self) -> Vector {
        self.centroid_by(CentroidKind::VertexAverage)
    }

    pub fn centroid_by(&self, kind: CentroidKind) -> Vector {
        match kind {
            CentroidKind::VertexAverage => {
                let n = self.len() as f64;
                let sum = self
                    .vertices
                    .iter()
                    .fold(Vector::ZERO, |acc, v| acc + *v);
                Vector::new(sum.x / n, sum.y / n)
            }
            CentroidKind::AreaWeighted => {
                let area = self.area();
                let mut cx = 0.0;
                let mut cy = 0.0;
                for (a, b) in self.ring_edges() {
                    let cross = a.x * b.y - b.x * a.y;
                    cx += (a.x + b.x) * cross;
                    cy += (a.y + b.y) * cross;
                }
                Vector::new(cx, cy) * (1.0 / (6.0 * area))
            }
        }
    }

    /// Point-in-polygon test after Jordan, treating the polyline as a
    /// closed polygon regardless of the flag. Points on an edge or
    /// vertex count as inside.
    pub fn contains(&self, v: Vector) -> bool {
        let mut t = -1i32;
        for (a, b) in self.ring_edges() {
            t *= cross_prod_test(v, a, b);
            if t == 0 {
                // v sits on this edge or one of its endpoints
                break;
            }
        }
        t >= 0
    }

    /// True iff `v` exactly equals one of the vertices.
    pub fn contains_vertex(&self, v: Vector) -> bool {
        self.vertices.contains(&v)
    }

    /// Intersection record of every edge against `line`; one record per
    /// edge (`line1` the edge, `line2` the query line), whatever its
    /// status.
    pub fn intersection_with_line(&self, line: &Line) -> Vec<Intersection> {
        (0..self.edge_count())
            .map(|i| self.edge(i).intersection(line))
            .collect()
    }

    /// Pairwise edge intersections against another polyline; one record
    /// per edge pair (`line1` this polyline's edge, `line2` the
    /// other's).
    pub fn intersection(&self, other: &Polyline) -> Vec<Intersection> {
        let mut records = Vec::with_capacity(self.edge_count() * other.edge_count());
        for i in 0..self.edge_count() {
            let edge = self.edge(i);
            for j in 0..other.edge_count() {
                records.push(edge.intersection(&other.edge(j)));
            }
        }
        records
    }
}

/// Crossing test of the upward ray from `v` against edge `a`→`b`:
/// `1` no crossing, `-1` crossing, `0` when `v` lies on the edge.
fn cross_prod_test(v: Vector, a: Vector, b: Vector) -> i32 {
    let (a, b) = if a.y > b.y { (b, a) } else { (a, b) };
    if v.y <= a.y || v.y > b.y {
        return 1;
    }
    let delta = (a.x - v.x) * (b.y - v.y) - (a.y - v.y) * (b.x - v.x);
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

/// Vertex-by-vertex construction starting from [`Polyline::start_at`].
#[derive(Clone, Debug)]
pub struct PolylineBuilder {
    vertices: Vec<Vector>,
}

impl PolylineBuilder {
    /// Appends an absolute vertex.
    pub fn move_to(mut self, v: Vector) -> Self {
        self.vertices.push(v);
        self
    }

    /// Appends a vertex relative to the last one.
    pub fn direction(mut self, v: Vector) -> Self {
        let last = *self.vertices.last().expect("builder starts non-empty");
        self.vertices.push(last + v);
        self
    }

    pub fn build(self) -> Result<Polyline> {
        Polyline::open(self.vertices)
    }

    pub fn build_closed(self) -> Result<Polyline> {
        Polyline::closed(self.vertices)
    }
}
