// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn classify(delta: Decimal) -> Trend {
        if delta > Decimal::ZERO {
            Trend::Positive
        } else if delta < Decimal::ZERO {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Positive => "ahead",
            Trend::Negative => "behind",
            Trend::Neutral => "even",
        }
    }
}

/// All values in percent. Derived per render, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSnapshot {
    pub portfolio_return: Decimal,
    pub cdi_return: Decimal,
    pub ibov_return: Decimal,
    pub vs_cdi: Decimal,
    pub vs_ibov: Decimal,
}

pub fn compare(portfolio: Decimal, cdi: Decimal, ibov: Decimal) -> PerformanceSnapshot {
    PerformanceSnapshot {
        portfolio_return: portfolio,
        cdi_return: cdi,
        ibov_return: ibov,
        vs_cdi: portfolio - cdi,
        vs_ibov: portfolio - ibov,
    }
}

/// Signed percent with an explicit '+' on gains, e.g. "+2.00%".
pub fn fmt_delta(delta: Decimal) -> String {
    let rounded = delta.round_dp(2);
    if rounded > Decimal::ZERO {
        format!("+{:.2}%", rounded)
    } else {
        format!("{:.2}%", rounded)
    }
}
