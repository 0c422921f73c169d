use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::FromPrimitive;

/// A numeric value in one of the supported representations.
///
/// The union is closed: every kind either has an exact rational form or
/// is a non-finite float, so cross-kind comparison never needs runtime
/// type inspection beyond this tag.
#[derive(Clone, Debug)]
pub enum Num {
    /// Machine signed integer (covers i8..=i64 sources).
    Int(i64),
    /// IEEE-754 single precision.
    Single(f32),
    /// IEEE-754 double precision.
    Double(f64),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
    /// Exact arbitrary-precision rational.
    Ratio(BigRational),
}

/// Infinity classification of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Infinity {
    Negative,
    Positive,
    Finite,
}

impl Num {
    /// True iff the value is a float NaN. Non-float kinds are never NaN.
    pub fn is_nan(&self) -> bool {
        match self {
            Num::Single(v) => v.is_nan(),
            Num::Double(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Classifies the value as negative infinity, positive infinity, or
    /// finite. Only float kinds can be infinite; NaN classifies as
    /// `Finite` here (it is not infinitely large in magnitude).
    pub fn infinity(&self) -> Infinity {
        let v = match self {
            Num::Single(v) => f64::from(*v),
            Num::Double(v) => *v,
            _ => return Infinity::Finite,
        };
        if v == f64::NEG_INFINITY {
            Infinity::Negative
        } else if v == f64::INFINITY {
            Infinity::Positive
        } else {
            Infinity::Finite
        }
    }

    /// True iff the value is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.infinity() != Infinity::Finite
    }

    /// Exact rational form of the value. `None` for non-finite floats;
    /// exact for every integer and every finite binary float.
    pub(crate) fn as_rational(&self) -> Option<BigRational> {
        match self {
            Num::Int(v) => Some(BigRational::from_integer(BigInt::from(*v))),
            Num::Single(v) => BigRational::from_f64(f64::from(*v)),
            Num::Double(v) => BigRational::from_f64(*v),
            Num::BigInt(v) => Some(BigRational::from_integer(v.clone())),
            Num::Ratio(v) => Some(v.clone()),
        }
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(v) => write!(f, "{v}"),
            Num::Single(v) => write!(f, "{v}"),
            Num::Double(v) => write!(f, "{v}"),
            Num::BigInt(v) => write!(f, "{v}"),
            Num::Ratio(v) => write!(f, "{v}"),
        }
    }
}

impl From<i8> for Num {
    fn from(v: i8) -> Self {
        Num::Int(i64::from(v))
    }
}
impl From<i16> for Num {
    fn from(v: i16) -> Self {
        Num::Int(i64::from(v))
    }
}
impl From<i32> for Num {
    fn from(v: i32) -> Self {
        Num::Int(i64::from(v))
    }
}
impl From<i64> for Num {
    fn from(v: i64) -> Self {
        Num::Int(v)
    }
}
impl From<f32> for Num {
    fn from(v: f32) -> Self {
        Num::Single(v)
    }
}
impl From<f64> for Num {
    fn from(v: f64) -> Self {
        Num::Double(v)
    }
}
impl From<BigInt> for Num {
    fn from(v: BigInt) -> Self {
        Num::BigInt(v)
    }
}
impl From<BigRational> for Num {
    fn from(v: BigRational) -> Self {
        Num::Ratio(v)
    }
}
