// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::metrics::ratio;

#[derive(Debug, Clone, Serialize)]
pub struct GoalProjection {
    pub progress_pct: Decimal,
    pub remaining: Decimal,
    pub days_remaining: Option<i64>,
    /// Amount to put aside per day to reach the target by the deadline.
    /// `None` when the goal is already met or the deadline is absent/past.
    pub required_daily: Option<Decimal>,
}

pub fn project(
    target: Decimal,
    current: Decimal,
    deadline: Option<NaiveDate>,
    today: NaiveDate,
) -> GoalProjection {
    let progress_pct = ratio::pct_of(current, target).unwrap_or(Decimal::ZERO);
    let remaining = (target - current).max(Decimal::ZERO);
    let days_remaining = deadline.map(|d| (d - today).num_days());

    let required_daily = match days_remaining {
        Some(days) if days > 0 && remaining > Decimal::ZERO => {
            Some((remaining / Decimal::from(days)).round_dp(2))
        }
        _ => None,
    };

    GoalProjection {
        progress_pct,
        remaining,
        days_remaining,
        required_daily,
    }
}
