// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::commands::doctor;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    centavo::db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn healthy_database_reports_nothing() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status)
         VALUES ('2025-03-01', 'Groceries', '120.50', 'expense', 'paid')",
        [],
    )
    .unwrap();

    assert!(doctor::scan(&conn).unwrap().is_empty());
}

#[test]
fn flags_installment_number_past_count() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status,
            installment_count, installment_number)
         VALUES ('2025-03-01', 'TV', '33.33', 'expense', 'pending', 2, 3)",
        [],
    )
    .unwrap();

    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "installment_out_of_range");
    assert!(issues[0].detail.contains("3/2"));
}

#[test]
fn flags_recurrence_flag_period_disagreement() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status, is_recurring)
         VALUES ('2025-03-01', 'Gym', '80', 'expense', 'pending', 1)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status,
            is_recurring, recurrence_period)
         VALUES ('2025-03-01', 'Rent', '1200', 'expense', 'pending', 0, 'monthly')",
        [],
    )
    .unwrap();

    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.kind == "recurrence_mismatch"));
}

#[test]
fn flags_orphaned_sibling() {
    let conn = setup();
    // Corruption like this comes from outside the app, past the FK check.
    conn.execute_batch("PRAGMA foreign_keys = OFF").unwrap();
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status, parent_id)
         VALUES ('2025-03-01', 'Stray', '10', 'expense', 'pending', 999)",
        [],
    )
    .unwrap();

    let issues = doctor::scan(&conn).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "orphaned_sibling");
    assert!(issues[0].detail.contains("999"));
}

#[test]
fn flags_unparseable_stored_dates() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status, due_date)
         VALUES ('not-a-date', 'Broken', '10', 'expense', 'pending', 'whenever')",
        [],
    )
    .unwrap();

    let issues = doctor::scan(&conn).unwrap();
    let kinds: Vec<&str> = issues.iter().map(|i| i.kind).collect();
    assert!(kinds.contains(&"bad_date"));
    assert!(kinds.contains(&"bad_due_date"));
}
