// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::RecurrencePeriod;

/// Recurring templates expand one year ahead.
pub const DEFAULT_HORIZON: u32 = 12;

#[derive(Debug, Clone, Serialize)]
pub struct Occurrence {
    pub seq: u32, // 1-based
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub amount: Decimal,
}

// Calendar-aware shift: Jan 31 + 1 month = Feb 28/29.
fn shift_months(d: NaiveDate, n: u32) -> NaiveDate {
    d.checked_add_months(Months::new(n)).unwrap_or(d)
}

/// Split a total into `count` monthly installments. Every installment gets
/// round(total / count, 2); the last one absorbs the rounding remainder so
/// the occurrences sum back to exactly the total. Dates (and due dates, when
/// present) shift by whole calendar months from the first occurrence.
pub fn expand_installments(
    total: Decimal,
    count: u32,
    first_date: NaiveDate,
    first_due: Option<NaiveDate>,
) -> Vec<Occurrence> {
    if count <= 1 {
        return vec![Occurrence {
            seq: 1,
            date: first_date,
            due_date: first_due,
            amount: total,
        }];
    }

    let base = (total / Decimal::from(count)).round_dp(2);
    (1..=count)
        .map(|i| {
            let amount = if i == count {
                (total - base * Decimal::from(count - 1)).round_dp(2)
            } else {
                base
            };
            Occurrence {
                seq: i,
                date: shift_months(first_date, i - 1),
                due_date: first_due.map(|d| shift_months(d, i - 1)),
                amount,
            }
        })
        .collect()
}

fn step(d: NaiveDate, period: RecurrencePeriod, i: u32) -> NaiveDate {
    match period {
        RecurrencePeriod::Daily => d + Duration::days(i as i64),
        RecurrencePeriod::Weekly => d + Duration::days(7 * i as i64),
        RecurrencePeriod::Monthly => shift_months(d, i),
        RecurrencePeriod::Yearly => shift_months(d, 12 * i),
    }
}

/// Expand a recurring template into `horizon` dated occurrences at the
/// declared cadence. Each occurrence repeats the full amount.
pub fn expand_recurring(
    amount: Decimal,
    period: RecurrencePeriod,
    first_date: NaiveDate,
    first_due: Option<NaiveDate>,
    horizon: u32,
) -> Vec<Occurrence> {
    let horizon = horizon.max(1);
    (0..horizon)
        .map(|i| Occurrence {
            seq: i + 1,
            date: step(first_date, period, i),
            due_date: first_due.map(|d| step(d, period, i)),
            amount,
        })
        .collect()
}
