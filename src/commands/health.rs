// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::health;
use crate::utils::{maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthReport {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub score: Decimal,
    pub savings_rate: Decimal,
    pub label: String,
    pub advice: String,
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => Local::now().format("%Y-%m").to_string(),
    };

    let report = month_report(conn, &month)?;

    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let rows = vec![vec![
            report.month.clone(),
            format!("{:.2}", report.income),
            format!("{:.2}", report.expenses),
            format!("{:.1}%", report.savings_rate),
            format!("{:.0}", report.score),
            report.label.clone(),
        ]];
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expenses", "Savings rate", "Score", "Label"],
                rows,
            )
        );
        println!("{}", report.advice);
    }
    Ok(())
}

/// Sums settled rows for the month and runs the scoring curve. Amounts that
/// fail to parse count as zero.
pub fn month_report(conn: &Connection, month: &str) -> Result<HealthReport> {
    let mut stmt = conn.prepare(
        "SELECT type, amount FROM transactions
         WHERE substr(date,1,7)=?1 AND status IN ('paid','received')",
    )?;
    let mut rows = stmt.query([month])?;

    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    while let Some(r) = rows.next()? {
        let kind: String = r.get(0)?;
        let amount_s: String = r.get(1)?;
        let amount = amount_s.parse::<Decimal>().unwrap_or_default();
        if kind == "income" {
            income += amount;
        } else {
            expenses += amount;
        }
    }

    let hs = health::score(income, expenses);
    Ok(HealthReport {
        month: month.to_string(),
        income,
        expenses,
        score: hs.score,
        savings_rate: hs.savings_rate.round_dp(1),
        label: hs.label.as_str().to_string(),
        advice: health::advice(income, hs.savings_rate).to_string(),
    })
}
