//! Angle normalization and rounding helpers.

/// Full turn in radians.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Normalizes an angle into `[0, 2π)` by repeated ±2π, snapping an
/// exact 2π to 0. NaN passes through unchanged.
pub fn normalize_angle(rad: f64) -> f64 {
    let mut r = rad;
    while r > TWO_PI {
        r -= TWO_PI;
    }
    while r < 0.0 {
        r += TWO_PI;
    }
    if r == TWO_PI {
        0.0
    } else {
        r
    }
}

/// Half-up rounding: `floor(a + 0.5)`.
pub fn round_half_up(a: f64) -> f64 {
    (a + 0.5).floor()
}

/// Half-up rounding to a fixed number of decimal places.
pub fn round_to(a: f64, decimal_places: i32) -> f64 {
    let pow = 10f64.powi(decimal_places);
    round_half_up(a * pow) / pow
}
