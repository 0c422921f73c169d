use std::cmp::Ordering;

use super::compare::{compare, max_of, min_of};
use super::value::Num;
use crate::{PlanarError, Result};

/// Boundary policy of an interval: which of the two bounds belong to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    #[default]
    Closed,
    Open,
    LeftClosed,
    RightClosed,
}

impl Interval {
    /// Containment of `value` between `min` and `max` under this policy.
    /// Requires `min <= max` under the total order, else `InvalidBounds`.
    pub fn contains(self, min: &Num, value: &Num, max: &Num) -> Result<bool> {
        check_bounds(min, max)?;
        let lo = compare(value, min)?;
        let hi = compare(value, max)?;
        Ok(match self {
            Interval::Closed => lo != Ordering::Less && hi != Ordering::Greater,
            Interval::Open => lo == Ordering::Greater && hi == Ordering::Less,
            Interval::LeftClosed => lo != Ordering::Less && hi == Ordering::Less,
            Interval::RightClosed => lo == Ordering::Greater && hi != Ordering::Greater,
        })
    }
}

pub(crate) fn check_bounds(min: &Num, max: &Num) -> Result<()> {
    if compare(min, max)? == Ordering::Greater {
        return Err(PlanarError::InvalidBounds(format!(
            "min {min} greater than max {max}"
        )));
    }
    Ok(())
}

/// An immutable min/max pair with a boundary policy.
///
/// Bounds are validated once at construction; a `NumRange` that exists
/// always satisfies `min <= max` under the total order.
#[derive(Clone, Debug)]
pub struct NumRange {
    min: Num,
    max: Num,
    interval: Interval,
}

impl NumRange {
    pub fn new(min: impl Into<Num>, max: impl Into<Num>, interval: Interval) -> Result<Self> {
        let min = min.into();
        let max = max.into();
        check_bounds(&min, &max)?;
        Ok(Self { min, max, interval })
    }

    /// Shorthand for a range with the default `Closed` policy.
    pub fn closed(min: impl Into<Num>, max: impl Into<Num>) -> Result<Self> {
        Self::new(min, max, Interval::Closed)
    }

    /// Same bounds under a different boundary policy.
    pub fn with_interval(&self, interval: Interval) -> Self {
        Self {
            min: self.min.clone(),
            max: self.max.clone(),
            interval,
        }
    }

    pub fn min(&self) -> &Num {
        &self.min
    }

    pub fn max(&self) -> &Num {
        &self.max
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Containment under this range's boundary policy.
    pub fn contains(&self, value: &Num) -> Result<bool> {
        self.interval.contains(&self.min, value, &self.max)
    }

    /// Clamps `value` to `[min, max]` with plain numeric min/max.
    ///
    /// The boundary policy is deliberately ignored: an `Open` range
    /// still adjusts an outside value onto its excluded boundary. This
    /// matches the long-standing behavior of the containment/adjust
    /// pair and is kept as-is.
    pub fn adjust(&self, value: &Num) -> Result<Num> {
        let upper = min_of(&[value.clone(), self.max.clone()])?;
        max_of(&[self.min.clone(), upper])
    }
}

impl PartialEq for NumRange {
    fn eq(&self, other: &Self) -> bool {
        self.interval == other.interval
            && matches!(compare(&self.min, &other.min), Ok(Ordering::Equal))
            && matches!(compare(&self.max, &other.max), Ok(Ordering::Equal))
    }
}
