// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid transaction kind '{0}', expected 'expense' or 'income'")]
    InvalidKind(String),
    #[error("Invalid status '{0}', expected paid|pending|received|overdue")]
    InvalidStatus(String),
    #[error("Invalid recurrence period '{0}', expected daily|weekly|monthly|yearly")]
    InvalidPeriod(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Expense => "expense",
            TxKind::Income => "income",
        }
    }

    /// Status a transaction of this kind settles into when paid off.
    pub fn settled_status(&self) -> TxStatus {
        match self {
            TxKind::Expense => TxStatus::Paid,
            TxKind::Income => TxStatus::Received,
        }
    }
}

impl FromStr for TxKind {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(TxKind::Expense),
            "income" => Ok(TxKind::Income),
            other => Err(ModelError::InvalidKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Paid,
    Pending,
    Received,
    Overdue,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Paid => "paid",
            TxStatus::Pending => "pending",
            TxStatus::Received => "received",
            TxStatus::Overdue => "overdue",
        }
    }

    /// Settled rows count toward realized cashflow; pending/overdue do not.
    pub fn is_settled(&self) -> bool {
        matches!(self, TxStatus::Paid | TxStatus::Received)
    }
}

impl FromStr for TxStatus {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(TxStatus::Paid),
            "pending" => Ok(TxStatus::Pending),
            "received" => Ok(TxStatus::Received),
            "overdue" => Ok(TxStatus::Overdue),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePeriod::Daily => "daily",
            RecurrencePeriod::Weekly => "weekly",
            RecurrencePeriod::Monthly => "monthly",
            RecurrencePeriod::Yearly => "yearly",
        }
    }
}

impl FromStr for RecurrencePeriod {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(RecurrencePeriod::Daily),
            "weekly" => Ok(RecurrencePeriod::Weekly),
            "monthly" => Ok(RecurrencePeriod::Monthly),
            "yearly" => Ok(RecurrencePeriod::Yearly),
            other => Err(ModelError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Category icon identifiers. Unknown names resolve to `Other` instead of
/// being looked up dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Home,
    Food,
    Transport,
    Health,
    Leisure,
    Shopping,
    Salary,
    Investments,
    Other,
}

impl CategoryIcon {
    pub fn from_name(s: &str) -> CategoryIcon {
        match s {
            "home" => CategoryIcon::Home,
            "food" => CategoryIcon::Food,
            "transport" => CategoryIcon::Transport,
            "health" => CategoryIcon::Health,
            "leisure" => CategoryIcon::Leisure,
            "shopping" => CategoryIcon::Shopping,
            "salary" => CategoryIcon::Salary,
            "investments" => CategoryIcon::Investments,
            _ => CategoryIcon::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::Home => "home",
            CategoryIcon::Food => "food",
            CategoryIcon::Transport => "transport",
            CategoryIcon::Health => "health",
            CategoryIcon::Leisure => "leisure",
            CategoryIcon::Shopping => "shopping",
            CategoryIcon::Salary => "salary",
            CategoryIcon::Investments => "investments",
            CategoryIcon::Other => "other",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryIcon::Home => "🏠",
            CategoryIcon::Food => "🍽",
            CategoryIcon::Transport => "🚗",
            CategoryIcon::Health => "⚕",
            CategoryIcon::Leisure => "🎮",
            CategoryIcon::Shopping => "🛒",
            CategoryIcon::Salary => "💼",
            CategoryIcon::Investments => "📈",
            CategoryIcon::Other => "•",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: CategoryIcon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub kind: TxKind,
    pub status: TxStatus,
    pub category_id: Option<i64>,
    pub due_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub recurrence_period: Option<RecurrencePeriod>,
    pub installment_count: u32,
    pub installment_number: u32,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
}

/// One row of the monthly benchmark table, all values in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub month: String, // YYYY-MM
    pub portfolio_return: Decimal,
    pub cdi_return: Decimal,
    pub ibov_return: Decimal,
}
