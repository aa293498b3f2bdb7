// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::schedule::{self, DueStatus};
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{Local, NaiveTime};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("upcoming", sub)) => upcoming(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct BillRow {
    pub id: i64,
    pub description: String,
    pub amount: String,
    pub kind: String,
    /// "-" when the stored due date is unparseable.
    pub due: String,
    pub due_status: Option<DueStatus>,
    pub days: Option<i64>,
}

fn upcoming(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_bills(conn, sub.get_one::<String>("month").map(|s| s.as_str()))?;

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("All settled, no pending bills");
            return Ok(());
        }
        let symbol = get_currency_symbol(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| {
                let amount = b.amount.parse().unwrap_or_default();
                vec![
                    b.id.to_string(),
                    b.description.clone(),
                    fmt_money(&amount, &symbol),
                    b.kind.clone(),
                    b.due.clone(),
                    b.due_status.map(|s| s.badge().to_string()).unwrap_or_default(),
                    b.days.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Description", "Amount", "Kind", "Due", "", "Days"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn query_bills(conn: &Connection, month: Option<&str>) -> Result<Vec<BillRow>> {
    let mut sql = String::from(
        "SELECT id, description, amount, type, due_date FROM transactions
         WHERE status IN ('pending','overdue') AND due_date IS NOT NULL",
    );
    if month.is_some() {
        sql.push_str(" AND substr(due_date,1,7)=?1");
    }
    sql.push_str(" ORDER BY due_date, id");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match month {
        Some(m) => stmt.query([m])?,
        None => stmt.query([])?,
    };

    let now = Local::now().naive_local();
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let description: String = r.get(1)?;
        let amount: String = r.get(2)?;
        let kind: String = r.get(3)?;
        let due_raw: String = r.get(4)?;

        // Stored dates are untrusted; a bad one renders "-" instead of
        // failing the whole listing.
        let parsed = schedule::parse_when(&due_raw);
        let (due, due_status, days) = match parsed {
            Some(d) => (
                d.to_string(),
                Some(schedule::classify_due(d.and_time(NaiveTime::MIN), now)),
                Some(schedule::days_until(d, now.date())),
            ),
            None => ("-".to_string(), None, None),
        };
        data.push(BillRow {
            id,
            description,
            amount,
            kind,
            due,
            due_status,
            days,
        });
    }
    Ok(data)
}
