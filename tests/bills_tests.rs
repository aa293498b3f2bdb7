// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::commands::bills::query_bills;
use centavo::metrics::schedule::DueStatus;
use chrono::{Duration, Local};
use rusqlite::{params, Connection};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    centavo::db::init_schema(&conn).unwrap();
    conn
}

fn insert_bill(conn: &Connection, description: &str, due: &str, status: &str) {
    conn.execute(
        "INSERT INTO transactions(date, description, amount, type, status, due_date)
         VALUES ('2025-01-01', ?1, '100', 'expense', ?2, ?3)",
        params![description, status, due],
    )
    .unwrap();
}

#[test]
fn bills_are_classified_against_the_clock() {
    let conn = setup();
    let today = Local::now().date_naive();
    insert_bill(&conn, "Old", &(today - Duration::days(3)).to_string(), "pending");
    insert_bill(&conn, "Now", &today.to_string(), "pending");
    insert_bill(&conn, "Soon", &(today + Duration::days(5)).to_string(), "pending");

    let rows = query_bills(&conn, None).unwrap();
    assert_eq!(rows.len(), 3);

    let by_name = |n: &str| rows.iter().find(|b| b.description == n).unwrap();
    assert_eq!(by_name("Old").due_status, Some(DueStatus::Overdue));
    assert_eq!(by_name("Now").due_status, Some(DueStatus::DueToday));
    assert_eq!(by_name("Soon").due_status, Some(DueStatus::Upcoming));
    assert_eq!(by_name("Now").days, Some(0));
    assert_eq!(by_name("Soon").days, Some(5));
}

#[test]
fn invalid_stored_due_date_renders_dash() {
    let conn = setup();
    insert_bill(&conn, "Broken", "not-a-date", "pending");

    let rows = query_bills(&conn, None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].due, "-");
    assert_eq!(rows[0].due_status, None);
    assert_eq!(rows[0].days, None);
}

#[test]
fn settled_rows_are_not_bills() {
    let conn = setup();
    let today = Local::now().date_naive();
    insert_bill(&conn, "Paid already", &today.to_string(), "paid");
    insert_bill(&conn, "Still open", &today.to_string(), "overdue");

    let rows = query_bills(&conn, None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Still open");
}

#[test]
fn month_filter_narrows_by_due_month() {
    let conn = setup();
    insert_bill(&conn, "Jan", "2025-01-20", "pending");
    insert_bill(&conn, "Feb", "2025-02-20", "pending");

    let rows = query_bills(&conn, Some("2025-02")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Feb");
}
