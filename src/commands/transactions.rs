// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::recurrence::{self, Occurrence};
use crate::models::{RecurrencePeriod, Transaction, TxKind, TxStatus};
use crate::utils::{id_for_category, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{anyhow, ensure, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("pay", sub)) => pay(conn, sub)?,
        _ => {}
    }
    Ok(())
}

struct NewTx<'a> {
    description: &'a str,
    kind: TxKind,
    status: TxStatus,
    category_id: Option<i64>,
    is_recurring: bool,
    period: Option<RecurrencePeriod>,
    installment_count: u32,
}

fn insert_occurrence(
    conn: &Connection,
    tx: &NewTx,
    o: &Occurrence,
    parent_id: Option<i64>,
) -> Result<i64> {
    // Recurring occurrences are whole transactions, not parts of a split;
    // only installment expansions carry their position.
    let number = if tx.is_recurring { 1 } else { o.seq };
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status, category_id,
            due_date, is_recurring, recurrence_period, installment_count, installment_number,
            parent_id)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12)",
        params![
            o.date.to_string(),
            tx.description,
            o.amount.to_string(),
            tx.kind.as_str(),
            tx.status.as_str(),
            tx.category_id,
            o.due_date.map(|d| d.to_string()),
            tx.is_recurring,
            tx.period.map(|p| p.as_str()),
            tx.installment_count,
            number,
            parent_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    ensure!(amount > Decimal::ZERO, "Amount must be positive");
    let kind = TxKind::from_str(sub.get_one::<String>("kind").unwrap())?;
    let status = match sub.get_one::<String>("status") {
        Some(s) => TxStatus::from_str(s)?,
        None => kind.settled_status(),
    };
    let category_id = sub
        .get_one::<String>("category")
        .map(|c| id_for_category(conn, c))
        .transpose()?;
    let due = sub
        .get_one::<String>("due")
        .map(|s| parse_date(s))
        .transpose()?;
    let installments = sub.get_one::<u32>("installments").copied().unwrap_or(1);
    let period = sub
        .get_one::<String>("recur")
        .map(|s| RecurrencePeriod::from_str(s))
        .transpose()?;

    if installments > 1 {
        let occurrences = recurrence::expand_installments(amount, installments, date, due);
        let tx = NewTx {
            description,
            kind,
            status,
            category_id,
            is_recurring: false,
            period: None,
            installment_count: installments,
        };
        insert_group(conn, &tx, &occurrences)?;
        println!(
            "Recorded '{}': {} split into {} monthly installments",
            description, amount, installments
        );
    } else if let Some(period) = period {
        let occurrences = recurrence::expand_recurring(
            amount,
            period,
            date,
            due,
            recurrence::DEFAULT_HORIZON,
        );
        let tx = NewTx {
            description,
            kind,
            status,
            category_id,
            is_recurring: true,
            period: Some(period),
            installment_count: 1,
        };
        insert_group(conn, &tx, &occurrences)?;
        println!(
            "Recorded '{}': {} repeating {} for {} occurrences",
            description,
            amount,
            period.as_str(),
            occurrences.len()
        );
    } else {
        let tx = NewTx {
            description,
            kind,
            status,
            category_id,
            is_recurring: false,
            period: None,
            installment_count: 1,
        };
        let single = Occurrence {
            seq: 1,
            date,
            due_date: due,
            amount,
        };
        insert_occurrence(conn, &tx, &single, None)?;
        println!("Recorded {} on {} '{}'", amount, date, description);
    }
    Ok(())
}

// Siblings reference the first occurrence through parent_id.
fn insert_group(conn: &Connection, tx: &NewTx, occurrences: &[Occurrence]) -> Result<()> {
    let mut first_id: Option<i64> = None;
    for o in occurrences {
        let id = insert_occurrence(conn, tx, o, first_id)?;
        if first_id.is_none() {
            first_id = Some(id);
        }
    }
    Ok(())
}

fn pay(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let tx = get_transaction(conn, id)?;
    if tx.status.is_settled() {
        println!("'{}' is already {}", tx.description, tx.status.as_str());
        return Ok(());
    }
    let settled = tx.kind.settled_status();
    conn.execute(
        "UPDATE transactions SET status=?1 WHERE id=?2",
        params![settled.as_str(), id],
    )?;
    println!("'{}' ({}) marked {}", tx.description, tx.amount, settled.as_str());
    Ok(())
}

/// Load one row into the domain model. Our own writes keep `date` strict;
/// `due_date` and the amount stay lenient like every other read path.
pub fn get_transaction(conn: &Connection, id: i64) -> Result<Transaction> {
    let raw = conn
        .query_row(
            "SELECT id, date, description, amount, type, status, category_id, due_date,
                    is_recurring, recurrence_period, installment_count, installment_number,
                    parent_id
             FROM transactions WHERE id=?1",
            params![id],
            |r| {
                Ok((
                    r.get::<_, i64>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, String>(3)?,
                    r.get::<_, String>(4)?,
                    r.get::<_, String>(5)?,
                    r.get::<_, Option<i64>>(6)?,
                    r.get::<_, Option<String>>(7)?,
                    r.get::<_, bool>(8)?,
                    r.get::<_, Option<String>>(9)?,
                    r.get::<_, u32>(10)?,
                    r.get::<_, u32>(11)?,
                    r.get::<_, Option<i64>>(12)?,
                ))
            },
        )
        .map_err(|_| anyhow!("Transaction {} not found", id))?;

    Ok(Transaction {
        id: raw.0,
        date: parse_date(&raw.1)?,
        description: raw.2,
        amount: raw.3.parse().unwrap_or_default(),
        kind: TxKind::from_str(&raw.4)?,
        status: TxStatus::from_str(&raw.5)?,
        category_id: raw.6,
        due_date: raw.7.as_deref().and_then(crate::metrics::schedule::parse_when),
        is_recurring: raw.8,
        recurrence_period: raw.9.as_deref().map(RecurrencePeriod::from_str).transpose()?,
        installment_count: raw.10,
        installment_number: raw.11,
        parent_id: raw.12,
    })
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.kind.clone(),
                    r.status.clone(),
                    r.category.clone(),
                    r.installment.clone(),
                    r.due_date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Description", "Amount", "Kind", "Status", "Category", "Part", "Due"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub status: String,
    pub category: String,
    pub installment: String,
    pub due_date: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.date, t.description, t.amount, t.type, t.status, c.name,
                t.installment_number, t.installment_count, t.due_date
         FROM transactions t LEFT JOIN categories c ON t.category_id=c.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(t.date,1,7)=?");
        params_vec.push(month.into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND c.name=?");
        params_vec.push(cat.into());
    }
    if let Some(kind) = sub.get_one::<String>("kind") {
        sql.push_str(" AND t.type=?");
        params_vec.push(kind.into());
    }
    if let Some(status) = sub.get_one::<String>("status") {
        sql.push_str(" AND t.status=?");
        params_vec.push(status.into());
    }
    sql.push_str(" ORDER BY t.date DESC, t.id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let description: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let kind: String = r.get(4)?;
        let status: String = r.get(5)?;
        let category: Option<String> = r.get(6)?;
        let number: u32 = r.get(7)?;
        let count: u32 = r.get(8)?;
        let due_date: Option<String> = r.get(9)?;
        let installment = if count > 1 {
            format!("{}/{}", number, count)
        } else {
            String::new()
        };
        data.push(TransactionRow {
            id,
            date,
            description,
            amount,
            kind,
            status,
            category: category.unwrap_or_default(),
            installment,
            due_date: due_date.unwrap_or_default(),
        });
    }
    Ok(data)
}
