// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::performance::{self, Trend};
use crate::models::BenchmarkEntry;
use crate::utils::{maybe_print_json, parse_decimal, parse_month, pretty_table};
use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let portfolio = parse_decimal(sub.get_one::<String>("portfolio").unwrap())?;
    let cdi = parse_decimal(sub.get_one::<String>("cdi").unwrap())?;
    let ibov = parse_decimal(sub.get_one::<String>("ibov").unwrap())?;
    conn.execute(
        "INSERT INTO benchmarks(month, portfolio_return, cdi_return, ibov_return)
         VALUES (?1,?2,?3,?4)
         ON CONFLICT(month) DO UPDATE SET
            portfolio_return=excluded.portfolio_return,
            cdi_return=excluded.cdi_return,
            ibov_return=excluded.ibov_return",
        params![
            month,
            portfolio.to_string(),
            cdi.to_string(),
            ibov.to_string()
        ],
    )?;
    println!(
        "Returns for {}: portfolio {}%, CDI {}%, IBOV {}%",
        month, portfolio, cdi, ibov
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PerformanceView {
    pub month: String,
    #[serde(flatten)]
    pub snapshot: performance::PerformanceSnapshot,
    pub cdi_trend: Trend,
    pub ibov_trend: Trend,
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;

    let view = query_view(conn, month.as_deref())?;

    if !maybe_print_json(json_flag, jsonl_flag, &view)? {
        let s = &view.snapshot;
        let rows = vec![
            vec![
                "vs CDI".to_string(),
                performance::fmt_delta(s.vs_cdi),
                Trend::classify(s.vs_cdi).as_str().to_string(),
                format!("portfolio {:.2}% | CDI {:.2}%", s.portfolio_return, s.cdi_return),
            ],
            vec![
                "vs IBOV".to_string(),
                performance::fmt_delta(s.vs_ibov),
                Trend::classify(s.vs_ibov).as_str().to_string(),
                format!("portfolio {:.2}% | IBOV {:.2}%", s.portfolio_return, s.ibov_return),
            ],
        ];
        let hdr = format!("Benchmark ({})", view.month);
        println!(
            "{}",
            pretty_table(&[hdr.as_str(), "Delta", "Trend", "Detail"], rows)
        );
    }
    Ok(())
}

/// Defaults to the most recent month on record. Stored values that fail to
/// parse count as zero.
pub fn query_view(conn: &Connection, month: Option<&str>) -> Result<PerformanceView> {
    let row: Option<(String, String, String, String)> = match month {
        Some(m) => conn
            .query_row(
                "SELECT month, portfolio_return, cdi_return, ibov_return
                 FROM benchmarks WHERE month=?1",
                params![m],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .optional()?,
        None => conn
            .query_row(
                "SELECT month, portfolio_return, cdi_return, ibov_return
                 FROM benchmarks ORDER BY month DESC LIMIT 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .optional()?,
    };
    let (month, portfolio_s, cdi_s, ibov_s) = match (row, month) {
        (Some(r), _) => r,
        (None, Some(m)) => return Err(anyhow!("No benchmark returns recorded for {}", m)),
        (None, None) => return Err(anyhow!("No benchmark returns recorded yet, use 'perf set'")),
    };

    let entry = BenchmarkEntry {
        month,
        portfolio_return: portfolio_s.parse::<Decimal>().unwrap_or_default(),
        cdi_return: cdi_s.parse::<Decimal>().unwrap_or_default(),
        ibov_return: ibov_s.parse::<Decimal>().unwrap_or_default(),
    };
    let snapshot =
        performance::compare(entry.portfolio_return, entry.cdi_return, entry.ibov_return);
    Ok(PerformanceView {
        month: entry.month,
        cdi_trend: Trend::classify(snapshot.vs_cdi),
        ibov_trend: Trend::classify(snapshot.vs_ibov),
        snapshot,
    })
}
