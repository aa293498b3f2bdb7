// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthLabel {
    Excellent,
    Healthy,
    Moderate,
    Attention,
    Critical,
}

impl HealthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Excellent => "Excellent",
            HealthLabel::Healthy => "Healthy",
            HealthLabel::Moderate => "Moderate",
            HealthLabel::Attention => "Attention",
            HealthLabel::Critical => "Critical",
        }
    }

    fn for_score(score: Decimal) -> HealthLabel {
        if score >= Decimal::from(80) {
            HealthLabel::Excellent
        } else if score >= Decimal::from(60) {
            HealthLabel::Healthy
        } else if score >= Decimal::from(40) {
            HealthLabel::Moderate
        } else if score >= Decimal::from(20) {
            HealthLabel::Attention
        } else {
            HealthLabel::Critical
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthScore {
    pub score: Decimal,
    pub savings_rate: Decimal, // percent
    pub label: HealthLabel,
}

/// Piecewise savings-rate curve, hand-tuned; the breakpoints and
/// coefficients are load-bearing for the score tiers and must not drift.
///
/// - rate >= 20  -> min(100, 70 + (rate - 20) * 1.5)
/// - 0 <= rate < 20 -> 40 + (rate / 20) * 30
/// - rate < 0    -> max(0, 40 + (rate / 50) * 40)
///
/// income = 0 is the degenerate case: the savings rate is undefined and the
/// score is pinned to 0.
pub fn score(income: Decimal, expenses: Decimal) -> HealthScore {
    if income <= Decimal::ZERO {
        return HealthScore {
            score: Decimal::ZERO,
            savings_rate: Decimal::ZERO,
            label: HealthLabel::Critical,
        };
    }

    let rate = (income - expenses) / income * Decimal::ONE_HUNDRED;

    let twenty = Decimal::from(20);
    let forty = Decimal::from(40);
    let raw = if rate >= twenty {
        let s = Decimal::from(70) + (rate - twenty) * Decimal::new(15, 1);
        s.min(Decimal::ONE_HUNDRED)
    } else if rate >= Decimal::ZERO {
        forty + (rate / twenty) * Decimal::from(30)
    } else {
        let s = forty + (rate / Decimal::from(50)) * forty;
        s.max(Decimal::ZERO)
    };
    let score = raw.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    HealthScore {
        score,
        savings_rate: rate,
        label: HealthLabel::for_score(score),
    }
}

/// Advisory line shown under the score.
pub fn advice(income: Decimal, savings_rate: Decimal) -> &'static str {
    if income <= Decimal::ZERO {
        return "Record some income to see your financial health";
    }
    if savings_rate >= Decimal::from(20) {
        "Great job! You are saving well"
    } else if savings_rate >= Decimal::from(10) {
        "Good work, keep saving"
    } else if savings_rate >= Decimal::ZERO {
        "Try to save at least 10% of your income"
    } else {
        "Watch out: expenses exceed income"
    }
}
