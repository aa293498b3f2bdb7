// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::{goal, schedule};
use crate::models::Goal;
use crate::utils::{
    fmt_money, get_currency_symbol, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::{anyhow, ensure, Result};
use chrono::Local;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("contribute", sub)) => contribute(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    ensure!(target > Decimal::ZERO, "Target amount must be positive");
    let description = sub.get_one::<String>("description").map(|s| s.to_string());
    let deadline = sub
        .get_one::<String>("deadline")
        .map(|s| parse_date(s))
        .transpose()?;
    conn.execute(
        "INSERT INTO goals(title, description, target_amount, deadline) VALUES (?1,?2,?3,?4)",
        params![
            title,
            description,
            target.to_string(),
            deadline.map(|d| d.to_string())
        ],
    )?;
    println!("Goal '{}' created, target {}", title, target);
    Ok(())
}

fn contribute(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    ensure!(amount > Decimal::ZERO, "Contribution must be positive");
    let current_s: String = conn
        .query_row(
            "SELECT current_amount FROM goals WHERE title=?1",
            params![title],
            |r| r.get(0),
        )
        .map_err(|_| anyhow!("Goal '{}' not found", title))?;
    let current = current_s.parse::<Decimal>().unwrap_or_default();
    let updated = current + amount;
    conn.execute(
        "UPDATE goals SET current_amount=?1 WHERE title=?2",
        params![updated.to_string(), title],
    )?;
    println!("Goal '{}': {} -> {}", title, current, updated);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    conn.execute("DELETE FROM goals WHERE title=?1", params![title])?;
    println!("Removed goal '{}'", title);
    Ok(())
}

#[derive(Serialize)]
pub struct GoalRow {
    #[serde(flatten)]
    pub goal: Goal,
    pub projection: goal::GoalProjection,
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_goals(conn)?;

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency_symbol(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|g| {
                let p = &g.projection;
                vec![
                    g.goal.title.clone(),
                    fmt_money(&g.goal.current_amount, &symbol),
                    fmt_money(&g.goal.target_amount, &symbol),
                    format!("{:.0}%", p.progress_pct),
                    fmt_money(&p.remaining, &symbol),
                    p.days_remaining
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into()),
                    p.required_daily
                        .map(|d| fmt_money(&d, &symbol))
                        .unwrap_or_else(|| "-".into()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Goal", "Saved", "Target", "Progress", "Remaining", "Days left", "Per day"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn query_goals(conn: &Connection) -> Result<Vec<GoalRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, target_amount, current_amount, deadline
         FROM goals ORDER BY title",
    )?;
    let mut rows = stmt.query([])?;

    let today = Local::now().date_naive();
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let title: String = r.get(1)?;
        let description: Option<String> = r.get(2)?;
        let target_s: String = r.get(3)?;
        let current_s: String = r.get(4)?;
        let deadline_s: Option<String> = r.get(5)?;

        let target = target_s.parse::<Decimal>().unwrap_or_default();
        let current = current_s.parse::<Decimal>().unwrap_or_default();
        // Invalid stored deadlines degrade to "no deadline".
        let deadline = deadline_s.as_deref().and_then(schedule::parse_when);

        data.push(GoalRow {
            goal: Goal {
                id,
                title,
                description,
                target_amount: target,
                current_amount: current,
                deadline,
            },
            projection: goal::project(target, current, deadline, today),
        });
    }
    Ok(data)
}
