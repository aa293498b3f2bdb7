// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::ratio;
use crate::utils::{maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        Some(("allocation", sub)) => allocation(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct CashflowRow {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub savings_rate: Option<Decimal>,
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);

    let mut stmt = conn.prepare(
        "SELECT substr(date,1,7) AS month, amount, type FROM transactions
         WHERE status IN ('paid','received') ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;

    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for row in rows {
        let (m, amount_s, kind) = row?;
        let amount = amount_s.parse::<Decimal>().unwrap_or_default();
        let entry = map.entry(m).or_insert((Decimal::ZERO, Decimal::ZERO));
        if kind == "income" {
            entry.0 += amount;
        } else {
            entry.1 += amount;
        }
    }

    let data: Vec<CashflowRow> = map
        .iter()
        .rev()
        .take(months)
        .map(|(m, (inc, exp))| CashflowRow {
            month: m.clone(),
            income: *inc,
            expense: *exp,
            savings_rate: ratio::savings_rate(*inc, *exp).map(|r| r.round_dp(1)),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    format!("{:.2}", r.income),
                    format!("{:.2}", r.expense),
                    r.savings_rate
                        .map(ratio::fmt_pct)
                        .unwrap_or_else(|| "-".into()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Savings rate"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct AllocationRow {
    pub category: String,
    pub spent: Decimal,
    pub share_pct: Decimal,
}

fn allocation(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;

    let mut stmt = conn.prepare(
        "SELECT c.name, t.amount FROM transactions t
         LEFT JOIN categories c ON t.category_id=c.id
         WHERE t.type='expense' AND substr(t.date,1,7)=?1",
    )?;
    let rows = stmt.query_map([&month], |r| {
        Ok((r.get::<_, Option<String>>(0)?, r.get::<_, String>(1)?))
    })?;

    let mut agg: HashMap<String, Decimal> = HashMap::new();
    for row in rows {
        let (cat_opt, amount_s) = row?;
        let cat = cat_opt.unwrap_or("(uncategorized)".into());
        let amount = amount_s.parse::<Decimal>().unwrap_or_default();
        *agg.entry(cat).or_insert(Decimal::ZERO) += amount;
    }

    let mut items: Vec<(String, Decimal)> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    let shares = ratio::allocation(&items);

    let data: Vec<AllocationRow> = items
        .iter()
        .zip(shares.iter())
        .map(|((cat, spent), (_, share))| AllocationRow {
            category: cat.clone(),
            spent: *spent,
            share_pct: *share,
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    format!("{:.2}", r.spent),
                    ratio::fmt_pct(r.share_pct),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}
