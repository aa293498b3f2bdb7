// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

/// Savings rate in percent. `None` when income is zero (undefined, never a
/// division).
pub fn savings_rate(income: Decimal, expenses: Decimal) -> Option<Decimal> {
    if income <= Decimal::ZERO {
        return None;
    }
    Some((income - expenses) / income * Decimal::ONE_HUNDRED)
}

/// `part` as a percentage of `whole`; `None` when `whole` is zero.
pub fn pct_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole == Decimal::ZERO {
        return None;
    }
    Some(part / whole * Decimal::ONE_HUNDRED)
}

/// Progress toward a target, capped at 100 for display. Zero/negative
/// targets yield 0.
pub fn progress_pct(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (current / target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
}

/// Per-label share of the total, in percent rounded to 2 decimals.
/// A zero total yields zero shares rather than a division.
pub fn allocation(items: &[(String, Decimal)]) -> Vec<(String, Decimal)> {
    let total: Decimal = items.iter().map(|(_, v)| *v).sum();
    items
        .iter()
        .map(|(label, v)| {
            let share = pct_of(*v, total).unwrap_or(Decimal::ZERO).round_dp(2);
            (label.clone(), share)
        })
        .collect()
}

pub fn fmt_pct(d: Decimal) -> String {
    format!("{:.2}%", d.round_dp(2))
}

/// Inverse of [`fmt_pct`]; lenient about a trailing '%' and whitespace.
/// Garbage degrades to `None`.
pub fn parse_pct(s: &str) -> Option<Decimal> {
    s.trim().trim_end_matches('%').trim().parse::<Decimal>().ok()
}
