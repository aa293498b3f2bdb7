// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::metrics::recurrence;
use centavo::models::RecurrencePeriod;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn installments_sum_back_to_total() {
    let occ = recurrence::expand_installments(dec("100"), 3, d("2025-01-15"), None);
    assert_eq!(occ.len(), 3);
    assert_eq!(occ[0].amount, dec("33.33"));
    assert_eq!(occ[1].amount, dec("33.33"));
    assert_eq!(occ[2].amount, dec("33.34"));
    let sum: Decimal = occ.iter().map(|o| o.amount).sum();
    assert_eq!(sum, dec("100"));
}

#[test]
fn installment_dates_shift_by_calendar_months() {
    let occ = recurrence::expand_installments(dec("300"), 3, d("2025-01-15"), None);
    assert_eq!(occ[0].date, d("2025-01-15"));
    assert_eq!(occ[1].date, d("2025-02-15"));
    assert_eq!(occ[2].date, d("2025-03-15"));
    assert_eq!(occ[0].seq, 1);
    assert_eq!(occ[2].seq, 3);
}

#[test]
fn month_end_dates_clamp_not_overflow() {
    let occ = recurrence::expand_installments(dec("300"), 3, d("2025-01-31"), None);
    assert_eq!(occ[0].date, d("2025-01-31"));
    assert_eq!(occ[1].date, d("2025-02-28"));
    assert_eq!(occ[2].date, d("2025-03-31"));
}

#[test]
fn due_dates_shift_alongside_dates() {
    let occ =
        recurrence::expand_installments(dec("200"), 2, d("2025-01-10"), Some(d("2025-01-31")));
    assert_eq!(occ[0].due_date, Some(d("2025-01-31")));
    assert_eq!(occ[1].due_date, Some(d("2025-02-28")));
}

#[test]
fn single_installment_is_passthrough() {
    let occ = recurrence::expand_installments(dec("99.99"), 1, d("2025-05-05"), None);
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0].amount, dec("99.99"));
    assert_eq!(occ[0].date, d("2025-05-05"));
}

#[test]
fn uneven_split_last_absorbs_remainder() {
    let occ = recurrence::expand_installments(dec("1000"), 7, d("2025-01-01"), None);
    // base = round(1000/7, 2) = 142.86
    for o in &occ[..6] {
        assert_eq!(o.amount, dec("142.86"));
    }
    assert_eq!(occ[6].amount, dec("142.84"));
    let sum: Decimal = occ.iter().map(|o| o.amount).sum();
    assert_eq!(sum, dec("1000"));
}

#[test]
fn monthly_recurrence_expands_a_year() {
    let occ = recurrence::expand_recurring(
        dec("49.90"),
        RecurrencePeriod::Monthly,
        d("2025-01-31"),
        None,
        recurrence::DEFAULT_HORIZON,
    );
    assert_eq!(occ.len(), 12);
    assert!(occ.iter().all(|o| o.amount == dec("49.90")));
    assert_eq!(occ[1].date, d("2025-02-28"));
    assert_eq!(occ[11].date, d("2025-12-31"));
}

#[test]
fn weekly_and_daily_step_in_days() {
    let weekly = recurrence::expand_recurring(
        dec("10"),
        RecurrencePeriod::Weekly,
        d("2025-03-01"),
        None,
        3,
    );
    assert_eq!(weekly[1].date, d("2025-03-08"));
    assert_eq!(weekly[2].date, d("2025-03-15"));

    let daily = recurrence::expand_recurring(
        dec("10"),
        RecurrencePeriod::Daily,
        d("2025-03-30"),
        None,
        3,
    );
    assert_eq!(daily[1].date, d("2025-03-31"));
    assert_eq!(daily[2].date, d("2025-04-01"));
}

#[test]
fn yearly_recurrence_clamps_leap_day() {
    let occ = recurrence::expand_recurring(
        dec("120"),
        RecurrencePeriod::Yearly,
        d("2024-02-29"),
        None,
        2,
    );
    assert_eq!(occ[0].date, d("2024-02-29"));
    assert_eq!(occ[1].date, d("2025-02-28"));
}
