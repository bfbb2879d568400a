//! Integration test: build the KRX CCP par-swap curve settling 2021-12-20.
//!
//! Quotes are the CCP rate parameters published for settlement 2021-12-20
//! (tenor in years -> par rate in percent).

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use parswap_core::calendars::{Calendar, HolidayCalendar};
use parswap_core::Date;
use parswap_curves::{Curve, KeyRateBump, ParRates};
use proptest::prelude::*;

const CCP_RATES: &[(f64, f64)] = &[
    (0.0, 0.9880102510),
    (0.25, 1.2700000000),
    (0.5, 1.3764285714),
    (0.75, 1.4614285714),
    (1.0, 1.5514285714),
    (1.5, 1.6739285714),
    (2.0, 1.7389285714),
    (3.0, 1.7914285714),
    (4.0, 1.8075000000),
    (5.0, 1.8050000000),
    (6.0, 1.8003571429),
    (7.0, 1.7875000000),
    (8.0, 1.7842857143),
    (9.0, 1.7867857143),
    (10.0, 1.7875000000),
    (12.0, 1.7792857143),
    (15.0, 1.6760714286),
    (20.0, 1.5525000000),
];

fn calendar() -> Arc<dyn Calendar> {
    Arc::new(
        HolidayCalendar::from_iso_strings(
            "KRX",
            [
                "2021-12-31", "2022-01-31", "2022-02-01", "2022-02-02", "2022-03-01",
                "2022-03-09", "2022-05-05", "2022-06-01", "2022-06-06", "2022-08-15",
                "2022-09-09", "2022-09-12", "2022-10-03", "2022-10-10", "2022-12-30",
            ],
        )
        .unwrap(),
    )
}

fn quotes() -> ParRates {
    ParRates::from_pairs(CCP_RATES.iter().copied()).unwrap()
}

fn settlement() -> Date {
    Date::parse("2021-12-20").unwrap()
}

#[test]
fn test_build_ccp_curve() {
    let curve = Curve::build(settlement(), quotes(), calendar()).unwrap();
    let points: Vec<_> = curve.pillars().collect();

    assert_eq!(points.len(), 81);
    assert_eq!(points[0].date, settlement());
    assert_eq!(points[0].discount_factor, 1.0);

    // Every quoted tenor is reproduced exactly on the swap curve.
    for &(tenor, rate) in CCP_RATES {
        let point = points.iter().find(|p| p.tenor == tenor).unwrap();
        assert_eq!(point.swap_rate, rate / 100.0, "tenor {tenor}");
    }

    // Positive quotes give factors in (0, 1], non-increasing.
    assert!(points.iter().all(|p| p.discount_factor > 0.0 && p.discount_factor <= 1.0));
    assert!(points.windows(2).all(|w| w[1].discount_factor <= w[0].discount_factor));

    // Zero curve and discount curve agree at every schedule date.
    for p in &points[1..] {
        let t = settlement().days_between(&p.date) as f64 / 365.0;
        assert_abs_diff_eq!((-p.zero_rate / 100.0 * t).exp(), p.discount_factor, epsilon = 1e-9);
    }

    // Rounded to 12 decimals.
    for p in &points {
        let scaled = p.discount_factor * 1e12;
        assert_abs_diff_eq!(scaled, scaled.round(), epsilon = 1e-3);
    }
}

#[test]
fn test_bump_moves_only_later_factors() {
    let base = Curve::build(settlement(), quotes(), calendar()).unwrap();
    let bumped_quotes = KeyRateBump::new(5.0, 1.0).apply(base.par_rates()).unwrap();
    let bumped = base.with_par_rates(bumped_quotes).unwrap();

    let base_points: Vec<_> = base.pillars().collect();
    let bumped_points: Vec<_> = bumped.pillars().collect();

    // Quarters up to the 4y quote are untouched by a 5y bump.
    for i in 0..=16 {
        assert_eq!(base_points[i], bumped_points[i]);
    }
    // The 5y point itself discounts more heavily.
    assert!(bumped_points[20].discount_factor < base_points[20].discount_factor);
    // Beyond the 6y quote the swap rates are unchanged again, yet factors differ.
    assert_eq!(bumped_points[30].swap_rate, base_points[30].swap_rate);
    assert_ne!(bumped_points[30].discount_factor, base_points[30].discount_factor);
}

proptest! {
    #[test]
    fn discount_factors_in_unit_interval(
        level in 0.0f64..8.0,
        slope in -0.2f64..0.2,
        offset in 0i64..3000,
    ) {
        let quotes = ParRates::from_pairs(
            CCP_RATES.iter().map(|&(t, _)| (t, (level + slope * t).max(0.0))),
        )
        .unwrap();
        let settle = Date::parse("2015-01-01").unwrap().add_days(offset);
        let curve = Curve::build(settle, quotes, calendar()).unwrap();

        for p in curve.pillars() {
            prop_assert!(p.discount_factor > 0.0 && p.discount_factor <= 1.0);
        }
    }
}
