use super::angle::normalize_angle;
use super::vector::Vector;
use crate::{PlanarError, Result};

/// Immutable circular or elliptical arc around `center`, spanned from
/// `start_angle` to `end_angle` counter-clockwise. Both angles are
/// normalized into `[0, 2π)` at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    center: Vector,
    x_radius: f64,
    y_radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    pub fn new(
        center: Vector,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            x_radius,
            y_radius,
            start_angle: normalize_angle(start_angle),
            end_angle: normalize_angle(end_angle),
        }
    }

    pub fn circular(center: Vector, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::new(center, radius, radius, start_angle, end_angle)
    }

    /// Circular arc from start/end point and a bulge factor, after the
    /// cvtbulge algorithm (Duff Kurland, Autodesk). The bulge is the
    /// tangent of a quarter of the included angle; negative for a
    /// clockwise arc, 1 for a half circle. CAD formats store polyline
    /// arc segments this way (DXF group code 42).
    pub fn from_bulge(start: Vector, end: Vector, bulge: f64) -> Self {
        let cotbce = (1.0 / bulge - bulge) / 2.0;
        let center = Vector::new(
            (start.x + end.x - (end.y - start.y) * cotbce) / 2.0,
            (start.y + end.y + (end.x - start.x) * cotbce) / 2.0,
        );
        let mut start_angle =
            normalize_angle((start.y - center.y).atan2(start.x - center.x));
        let mut end_angle = normalize_angle((end.y - center.y).atan2(end.x - center.x));
        if bulge < 0.0 {
            std::mem::swap(&mut start_angle, &mut end_angle);
        }
        let radius = center.distance(start);
        Self {
            center,
            x_radius: radius,
            y_radius: radius,
            start_angle,
            end_angle,
        }
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.center
    }

    #[inline]
    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    #[inline]
    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }

    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Angular extent from start to end angle, normalized to `[0, 2π)`.
    pub fn extent(&self) -> f64 {
        normalize_angle(self.end_angle - self.start_angle)
    }

    /// Inverse of [`Arc::from_bulge`]; not implemented.
    pub fn bulge(&self) -> Result<f64> {
        Err(PlanarError::Unsupported(
            "Arc::bulge is not yet implemented".into(),
        ))
    }
}
