use std::cmp::Ordering::{Equal, Greater, Less};

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use super::*;
use crate::PlanarError;

fn cmp(a: impl Into<Num>, b: impl Into<Num>) -> std::cmp::Ordering {
    compare(&a.into(), &b.into()).unwrap()
}

fn big(s: &str) -> Num {
    Num::from(s.parse::<BigInt>().unwrap())
}

#[test]
fn compare_same_kind() {
    assert_eq!(cmp(1, 2), Less);
    assert_eq!(cmp(1, 1), Equal);
    assert_eq!(cmp(2, 1), Greater);

    assert_eq!(cmp(1.5, 2.5), Less);
    assert_eq!(cmp(1.5, 1.5), Equal);
    assert_eq!(cmp(2.5, 1.5), Greater);
}

#[test]
fn compare_mixed_kinds() {
    assert_eq!(cmp(1.999_999_9, 2), Less);
    assert_eq!(cmp(2, 1.999_999_9), Greater);

    assert_eq!(cmp(1, 2.0), Less);
    assert_eq!(cmp(1, f64::MAX), Less);
    // smallest positive subnormal, not the most negative double
    assert_eq!(cmp(1, f64::MIN_POSITIVE), Greater);
    assert_eq!(cmp(1, 1.000_001), Less);
    assert_eq!(cmp(1, 1.000), Equal);
    // 0.25 * 4 is exact in binary floating point
    assert_eq!(cmp(1, 0.25 * 4.0), Equal);
}

#[test]
fn compare_nan_is_greatest() {
    assert_eq!(cmp(f64::NAN, f64::NAN), Equal);
    assert_eq!(cmp(f64::NAN, f32::NAN), Equal);

    assert_eq!(cmp(f64::NAN, 5), Greater);
    assert_eq!(cmp(-20, f32::NAN), Less);
    assert_eq!(cmp(f64::NAN, f64::INFINITY), Greater);
}

#[test]
fn compare_infinities() {
    assert_eq!(cmp(f64::NEG_INFINITY, f64::NEG_INFINITY), Equal);
    assert_eq!(cmp(f32::NEG_INFINITY, f32::NEG_INFINITY), Equal);
    assert_eq!(cmp(f64::NEG_INFINITY, f32::NEG_INFINITY), Equal);
    assert_eq!(cmp(f64::INFINITY, f64::INFINITY), Equal);
    assert_eq!(cmp(f32::INFINITY, f32::INFINITY), Equal);
    assert_eq!(cmp(f64::INFINITY, f32::INFINITY), Equal);

    assert_eq!(cmp(f64::INFINITY, f32::NEG_INFINITY), Greater);
    assert_eq!(cmp(f64::NEG_INFINITY, f32::INFINITY), Less);

    assert_eq!(cmp(f64::NEG_INFINITY, -3_049_478), Less);
    assert_eq!(cmp(f32::INFINITY, 3_049_478), Greater);

    assert_eq!(cmp(-3_049_478.54, f64::NEG_INFINITY), Greater);
    assert_eq!(cmp(3_049_478.298_34, f32::INFINITY), Less);
}

#[test]
fn compare_big_integers() {
    // well beyond the i64 range
    let a = big("214748364721474836472147483647");
    let b = big("214748364721474836472147483647");
    assert_eq!(compare(&a, &b).unwrap(), Equal);

    let a = big("214748364721474836472147483646");
    let b = big("214748364721474836472147483647");
    assert_eq!(compare(&a, &b).unwrap(), Less);
    assert_eq!(compare(&b, &a).unwrap(), Greater);

    let r: BigRational = "214748364721474836472147483647".parse::<BigInt>().unwrap().into();
    assert_eq!(compare(&b, &Num::from(r)).unwrap(), Equal);
}

#[test]
fn compare_across_big_and_small() {
    let five: BigRational = BigInt::from(5).into();
    assert_eq!(compare(&Num::from(five.clone()), &big("5")).unwrap(), Equal);
    assert_eq!(compare(&Num::from(5), &big("5")).unwrap(), Equal);
    assert_eq!(compare(&Num::from(5.0), &big("5")).unwrap(), Equal);

    let half_11 = BigRational::new(BigInt::from(11), BigInt::from(2));
    assert_eq!(compare(&Num::from(5.5), &Num::from(half_11)).unwrap(), Equal);
}

#[test]
fn nan_and_infinity_classification() {
    assert!(Num::from(f64::NAN).is_nan());
    assert!(Num::from(f32::NAN).is_nan());
    assert!(!Num::from(f64::NEG_INFINITY).is_nan());
    assert!(!Num::from(f64::INFINITY).is_nan());
    assert!(!Num::from(5.4).is_nan());
    assert!(!big("214748364721474836472147483647").is_nan());

    assert_eq!(Num::from(f64::NEG_INFINITY).infinity(), Infinity::Negative);
    assert_eq!(Num::from(f32::NEG_INFINITY).infinity(), Infinity::Negative);
    assert_eq!(Num::from(f64::INFINITY).infinity(), Infinity::Positive);
    assert_eq!(Num::from(f32::INFINITY).infinity(), Infinity::Positive);
    assert_eq!(Num::from(std::f64::consts::E).infinity(), Infinity::Finite);
    assert_eq!(
        big("214748364721474836472147483647").infinity(),
        Infinity::Finite
    );
    assert!(!Num::from(f64::NAN).is_infinite());
}

#[test]
fn max_and_min() {
    let max = max_of(&[1.into(), 2.into(), 3.into(), 3.into(), 4.into(), 5.into()]).unwrap();
    assert_eq!(compare(&max, &5.into()).unwrap(), Equal);

    let max = max_of(&[1.0.into(), 2.3.into(), 3.0.into(), 3.0.into(), 5.45.into()]).unwrap();
    assert_eq!(compare(&max, &5.45.into()).unwrap(), Equal);

    let min = min_of(&[5.into(), 4.into(), 3.into(), 3.into(), 2.into(), 1.into()]).unwrap();
    assert_eq!(compare(&min, &1.into()).unwrap(), Equal);

    let min = min_of(&[
        5.45.into(),
        1.0.into(),
        3.0.into(),
        2.3.into(),
        3.0.into(),
        1.0.into(),
        0.3.into(),
    ])
    .unwrap();
    assert_eq!(compare(&min, &0.3.into()).unwrap(), Equal);
}

#[test]
fn max_and_min_reject_empty_input() {
    assert!(matches!(max_of(&[]), Err(PlanarError::EmptyInput(_))));
    assert!(matches!(min_of(&[]), Err(PlanarError::EmptyInput(_))));
}

#[test]
fn interval_contains_tables() {
    let c = |i: Interval, min: i64, v: i64, max: i64| {
        i.contains(&min.into(), &v.into(), &max.into()).unwrap()
    };

    assert!(c(Interval::Closed, 1, 1, 10));
    assert!(c(Interval::Closed, 1, 10, 10));
    assert!(c(Interval::Closed, 1, 5, 10));
    assert!(!c(Interval::Closed, 1, 0, 10));
    assert!(!c(Interval::Closed, 1, 15, 10));

    assert!(!c(Interval::Open, 1, 1, 10));
    assert!(!c(Interval::Open, 1, 10, 10));
    assert!(c(Interval::Open, 1, 5, 10));
    assert!(!c(Interval::Open, 1, 0, 10));
    assert!(!c(Interval::Open, 1, 15, 10));

    assert!(c(Interval::LeftClosed, 1, 1, 10));
    assert!(!c(Interval::LeftClosed, 1, 10, 10));
    assert!(c(Interval::LeftClosed, 1, 5, 10));
    assert!(!c(Interval::LeftClosed, 1, 0, 10));
    assert!(!c(Interval::LeftClosed, 1, 15, 10));

    assert!(!c(Interval::RightClosed, 1, 1, 10));
    assert!(c(Interval::RightClosed, 1, 10, 10));
    assert!(c(Interval::RightClosed, 1, 5, 10));
    assert!(!c(Interval::RightClosed, 1, 0, 10));
    assert!(!c(Interval::RightClosed, 1, 15, 10));
}

#[test]
fn interval_rejects_inverted_bounds() {
    for interval in [
        Interval::Closed,
        Interval::Open,
        Interval::LeftClosed,
        Interval::RightClosed,
    ] {
        let r = interval.contains(&4.into(), &2.into(), &2.into());
        assert!(matches!(r, Err(PlanarError::InvalidBounds(_))));
    }
}

#[test]
fn range_construction() {
    assert!(NumRange::closed(1.0, 100.0).is_ok());
    assert!(NumRange::closed(1, 100).is_ok());
    assert!(NumRange::closed(1, 1).is_ok());
    assert!(NumRange::new(100.0, 100.0, Interval::Open).is_ok());
    assert!(matches!(
        NumRange::closed(20.0, 19.0),
        Err(PlanarError::InvalidBounds(_))
    ));
}

#[test]
fn range_contains_per_interval() {
    let closed = NumRange::closed(1.0, 100.0).unwrap();
    assert!(closed.contains(&50.into()).unwrap());
    assert!(closed.contains(&1.0.into()).unwrap());
    assert!(closed.contains(&100.0.into()).unwrap());
    assert!(!closed.contains(&0.5.into()).unwrap());
    assert!(!closed.contains(&100.0005.into()).unwrap());

    let open = closed.with_interval(Interval::Open);
    assert!(open.contains(&50.into()).unwrap());
    assert!(!open.contains(&1.0.into()).unwrap());
    assert!(!open.contains(&100.0.into()).unwrap());

    let left = closed.with_interval(Interval::LeftClosed);
    assert!(left.contains(&1.0.into()).unwrap());
    assert!(!left.contains(&100.0.into()).unwrap());

    let right = closed.with_interval(Interval::RightClosed);
    assert!(!right.contains(&1.0.into()).unwrap());
    assert!(right.contains(&100.0.into()).unwrap());
}

#[test]
fn range_adjust_clamps() {
    let r = NumRange::closed(1.0, 100.0).unwrap();
    let adjust = |v: f64| r.adjust(&v.into()).unwrap();
    assert_eq!(compare(&adjust(-50.0), &1.0.into()).unwrap(), Equal);
    assert_eq!(compare(&adjust(0.3), &1.0.into()).unwrap(), Equal);
    assert_eq!(compare(&adjust(100.0003), &100.0.into()).unwrap(), Equal);
    assert_eq!(compare(&adjust(105.0), &100.0.into()).unwrap(), Equal);
    assert_eq!(compare(&adjust(55.0), &55.0.into()).unwrap(), Equal);
}

#[test]
fn range_adjust_ignores_open_boundaries() {
    // clamping lands on the excluded bound, by long-standing behavior
    let r = NumRange::new(1.0, 100.0, Interval::Open).unwrap();
    let a = r.adjust(&(-50.0).into()).unwrap();
    assert_eq!(compare(&a, &1.0.into()).unwrap(), Equal);
}

#[test]
fn range_equality_is_numeric() {
    let i1 = NumRange::closed(1, 5).unwrap();
    let i2 = NumRange::closed(1, 5).unwrap();
    let i3 = NumRange::closed(1, 3).unwrap();
    let i4 = NumRange::closed(2, 5).unwrap();
    assert_eq!(i1, i2);
    assert_ne!(i1, i3);
    assert_ne!(i1, i4);

    // cross-kind: integer bounds equal double bounds
    let d2 = NumRange::closed(1.0, 5.0).unwrap();
    let d3 = NumRange::closed(1.0, 3.0).unwrap();
    assert_eq!(i1, d2);
    assert_ne!(i1, d3);

    let open = NumRange::new(1, 5, Interval::Open).unwrap();
    assert_ne!(open, i1);
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
        let x = Num::from(a);
        let y = Num::from(b);
        prop_assert_eq!(compare(&x, &y).unwrap(), compare(&y, &x).unwrap().reverse());
    }

    #[test]
    fn compare_agrees_with_int_order(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(cmp(a, b), a.cmp(&b));
    }

    #[test]
    fn adjust_lands_inside_closed_bounds(
        lo in -1.0e6..1.0e6f64,
        len in 0.0..1.0e6f64,
        v in -2.0e6..2.0e6f64,
    ) {
        let r = NumRange::closed(lo, lo + len).unwrap();
        let adjusted = r.adjust(&v.into()).unwrap();
        prop_assert!(r.contains(&adjusted).unwrap());
    }
}
