use std::cmp::Ordering;

use super::value::{Infinity, Num};
use crate::{PlanarError, Result};

/// Total-order comparison across mixed numeric representations.
///
/// Stages, in order:
/// 1. NaN screen: NaN equals NaN and is greater than every other value,
///    including positive infinity.
/// 2. Same-kind fast path: the representation's native ordering
///    (`total_cmp` for floats; NaN is already screened, so this is the
///    plain numeric order including ±∞).
/// 3. Infinity screen for mixed kinds: -∞ below everything, +∞ above
///    everything, equal infinities compare equal.
/// 4. Exact fallback: both operands promoted to `BigRational` and
///    compared exactly. A value without an exact rational form is an
///    error, never a silent coercion.
pub fn compare(a: &Num, b: &Num) -> Result<Ordering> {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return Ok(Ordering::Equal),
        (true, false) => return Ok(Ordering::Greater),
        (false, true) => return Ok(Ordering::Less),
        (false, false) => {}
    }
    match (a, b) {
        (Num::Int(x), Num::Int(y)) => return Ok(x.cmp(y)),
        (Num::Single(x), Num::Single(y)) => return Ok(x.total_cmp(y)),
        (Num::Double(x), Num::Double(y)) => return Ok(x.total_cmp(y)),
        (Num::BigInt(x), Num::BigInt(y)) => return Ok(x.cmp(y)),
        (Num::Ratio(x), Num::Ratio(y)) => return Ok(x.cmp(y)),
        _ => {}
    }
    match (a.infinity(), b.infinity()) {
        (Infinity::Finite, Infinity::Finite) => {}
        (Infinity::Negative, Infinity::Negative) | (Infinity::Positive, Infinity::Positive) => {
            return Ok(Ordering::Equal)
        }
        (Infinity::Negative, _) | (_, Infinity::Positive) => return Ok(Ordering::Less),
        (Infinity::Positive, _) | (_, Infinity::Negative) => return Ok(Ordering::Greater),
    }
    let ra = a.as_rational().ok_or_else(|| unsupported(a))?;
    let rb = b.as_rational().ok_or_else(|| unsupported(b))?;
    Ok(ra.cmp(&rb))
}

/// Maximum of a non-empty slice under [`compare`]. Ties keep the
/// earlier element.
pub fn max_of(values: &[Num]) -> Result<Num> {
    let (first, rest) = values
        .split_first()
        .ok_or(PlanarError::EmptyInput("max_of requires at least one value"))?;
    let mut best = first;
    for v in rest {
        if compare(v, best)? == Ordering::Greater {
            best = v;
        }
    }
    Ok(best.clone())
}

/// Minimum of a non-empty slice under [`compare`]. Ties keep the
/// earlier element.
pub fn min_of(values: &[Num]) -> Result<Num> {
    let (first, rest) = values
        .split_first()
        .ok_or(PlanarError::EmptyInput("min_of requires at least one value"))?;
    let mut best = first;
    for v in rest {
        if compare(v, best)? == Ordering::Less {
            best = v;
        }
    }
    Ok(best.clone())
}

fn unsupported(n: &Num) -> PlanarError {
    PlanarError::UnsupportedNumeric(format!("no exact rational form for {n}"))
}
