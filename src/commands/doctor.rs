// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::metrics::schedule;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

#[derive(Debug)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn handle(conn: &Connection) -> Result<()> {
    let issues = scan(conn)?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .iter()
            .map(|i| vec![i.kind.to_string(), i.detail.clone()])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn scan(conn: &Connection) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    // 1) Installment numbering out of range
    let mut stmt = conn.prepare(
        "SELECT id, installment_number, installment_count FROM transactions
         WHERE installment_number > installment_count",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let n: u32 = r.get(1)?;
        let c: u32 = r.get(2)?;
        issues.push(Issue {
            kind: "installment_out_of_range",
            detail: format!("tx {} is {}/{}", id, n, c),
        });
    }

    // 2) Recurrence flag and period disagree
    let mut stmt2 = conn.prepare(
        "SELECT id FROM transactions
         WHERE (is_recurring=1 AND recurrence_period IS NULL)
            OR (is_recurring=0 AND recurrence_period IS NOT NULL)",
    )?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        issues.push(Issue {
            kind: "recurrence_mismatch",
            detail: format!("tx {}", id),
        });
    }

    // 3) Orphaned installment/recurrence siblings
    let mut stmt3 = conn.prepare(
        "SELECT t.id, t.parent_id FROM transactions t
         LEFT JOIN transactions p ON t.parent_id=p.id
         WHERE t.parent_id IS NOT NULL AND p.id IS NULL",
    )?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let parent: i64 = r.get(1)?;
        issues.push(Issue {
            kind: "orphaned_sibling",
            detail: format!("tx {} references missing parent {}", id, parent),
        });
    }

    // 4) Unparseable stored dates
    let mut stmt4 = conn.prepare("SELECT id, date, due_date FROM transactions")?;
    let mut cur4 = stmt4.query([])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let due: Option<String> = r.get(2)?;
        if schedule::parse_when(&date).is_none() {
            issues.push(Issue {
                kind: "bad_date",
                detail: format!("tx {}: '{}'", id, date),
            });
        }
        if let Some(d) = due {
            if schedule::parse_when(&d).is_none() {
                issues.push(Issue {
                    kind: "bad_due_date",
                    detail: format!("tx {}: '{}'", id, d),
                });
            }
        }
    }

    Ok(issues)
}
