//! Property-based invariant tests for the schedule projector.
//!
//! 1. Exactly 9 rows, ordinals 1..=9 in order.
//! 2. projected_date <= official_date for every row.
//! 3. official_date is purchase + months in calendar months.
//! 4. basis == Mileage iff a positive rate exists and the mileage date
//!    is strictly before the official date.
//! 5. Status agrees with the sign of days_remaining.
//! 6. Projection is deterministic.
//! 7. A measurement before purchase yields one advisory and no mileage rows.
//! 8. A zero reading never produces a mileage row.
//! 9. CSV export has a header plus one line per row.

use chrono::NaiveDate;
use proptest::prelude::*;
use u_service_schedule::calendar::{add_calendar_months, shift_days};
use u_service_schedule::export::to_csv;
use u_service_schedule::models::{
    Basis, DailyMileageRate, MileageSample, Status, STANDARD_INTERVALS,
};
use u_service_schedule::projector::{mileage_due_date, ProjectionRequest, ScheduleProjector};

// ── Strategies ────────────────────────────────────────────────────────────

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..=20_000).prop_map(|offset| shift_days(epoch(), offset))
}

fn request_strategy() -> impl Strategy<Value = ProjectionRequest> {
    (
        date_strategy(),
        -2_000i64..=6_000, // today, relative to purchase
        proptest::option::of((
            0u32..=200_000, // odometer reading
            -400i64..=4_000, // measured_on, relative to purchase
        )),
    )
        .prop_map(|(purchase, today_offset, mileage)| {
            let request =
                ProjectionRequest::new(purchase, shift_days(purchase, today_offset));
            match mileage {
                Some((km, offset)) => request.with_mileage(km, shift_days(purchase, offset)),
                None => request,
            }
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Row shape and date ordering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nine_rows_in_ordinal_order(request in request_strategy()) {
        let p = ScheduleProjector::new().project(&request);
        let ordinals: Vec<u8> = p.rows.iter().map(|r| r.ordinal).collect();
        prop_assert_eq!(ordinals, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn projected_never_after_official(request in request_strategy()) {
        let p = ScheduleProjector::new().project(&request);
        for row in &p.rows {
            prop_assert!(
                row.projected_date <= row.official_date,
                "row {}: projected {} > official {}",
                row.ordinal, row.projected_date, row.official_date
            );
        }
    }

    #[test]
    fn official_is_calendar_months(request in request_strategy()) {
        let p = ScheduleProjector::new().project(&request);
        for (row, interval) in p.rows.iter().zip(STANDARD_INTERVALS.iter()) {
            prop_assert_eq!(
                row.official_date,
                add_calendar_months(request.purchase_date, interval.months)
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Basis selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mileage_basis_iff_strictly_earlier(request in request_strategy()) {
        let p = ScheduleProjector::new().project(&request);

        let usable: Option<(MileageSample, DailyMileageRate)> = request
            .mileage_sample()
            .filter(|s| s.measured_on >= request.purchase_date)
            .and_then(|s| DailyMileageRate::derive(request.purchase_date, &s).map(|r| (s, r)))
            .filter(|(_, r)| r.km_per_day() > 0.0);

        for (row, interval) in p.rows.iter().zip(STANDARD_INTERVALS.iter()) {
            let expected_mileage = match usable {
                Some((sample, rate)) => {
                    mileage_due_date(&sample, rate, interval.target_mileage) < row.official_date
                }
                None => false,
            };
            prop_assert_eq!(row.basis == Basis::Mileage, expected_mileage);
            if row.basis == Basis::Mileage {
                prop_assert!(row.projected_date < row.official_date);
            } else {
                prop_assert_eq!(row.projected_date, row.official_date);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Status and determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn status_matches_days_remaining(request in request_strategy()) {
        let p = ScheduleProjector::new().project(&request);
        for row in &p.rows {
            let expected = match row.days_remaining {
                d if d < 0 => Status::Late,
                0 => Status::DueToday,
                _ => Status::OnTrack,
            };
            prop_assert_eq!(row.status, expected);
            prop_assert_eq!(
                row.days_remaining,
                (row.projected_date - request.today).num_days()
            );
        }
    }

    #[test]
    fn projection_is_deterministic(request in request_strategy()) {
        let projector = ScheduleProjector::new();
        prop_assert_eq!(projector.project(&request), projector.project(&request));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-8. Degenerate mileage inputs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn measurement_before_purchase_is_ignored(
        purchase in date_strategy(),
        km in 0u32..=200_000,
        days_before in 1i64..=1_000,
    ) {
        let request = ProjectionRequest::new(purchase, purchase)
            .with_mileage(km, shift_days(purchase, -days_before));
        let p = ScheduleProjector::new().project(&request);

        prop_assert_eq!(p.advisories.len(), 1);
        prop_assert!(p.rate.is_none());
        prop_assert!(p.rows.iter().all(|r| r.basis == Basis::Time));
    }

    #[test]
    fn zero_reading_stays_time_based(
        purchase in date_strategy(),
        days_after in 0i64..=4_000,
    ) {
        let request = ProjectionRequest::new(purchase, purchase)
            .with_mileage(0, shift_days(purchase, days_after));
        let p = ScheduleProjector::new().project(&request);

        prop_assert_eq!(p.rate.map(|r| r.km_per_day()), Some(0.0));
        prop_assert!(p.rows.iter().all(|r| r.basis == Basis::Time));
        prop_assert!(p.advisories.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Export shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn csv_has_header_plus_nine_lines(request in request_strategy()) {
        let p = ScheduleProjector::new().project(&request);
        let csv = to_csv(&p.rows).unwrap();
        prop_assert_eq!(csv.lines().count(), 10);
        prop_assert!(csv.ends_with('\n'));
        for line in csv.lines() {
            prop_assert_eq!(line.split(',').count(), 7);
        }
    }
}
