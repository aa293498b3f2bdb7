// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DueStatus {
    Overdue,
    DueToday,
    Upcoming,
}

impl DueStatus {
    /// Badge text for list views; upcoming rows carry no badge.
    pub fn badge(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "OVERDUE",
            DueStatus::DueToday => "TODAY",
            DueStatus::Upcoming => "",
        }
    }
}

/// A bill due any time today is DueToday, never Overdue, regardless of the
/// time of day on either side. Earlier instants on another calendar day are
/// Overdue.
pub fn classify_due(due: NaiveDateTime, now: NaiveDateTime) -> DueStatus {
    if due.date() == now.date() {
        DueStatus::DueToday
    } else if due < now {
        DueStatus::Overdue
    } else {
        DueStatus::Upcoming
    }
}

pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Lenient parse of a stored date or datetime. Records coming back from the
/// storage boundary are untrusted; garbage degrades to `None` so a listing
/// renders "-" instead of failing.
pub fn parse_when(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}
