// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::{
    cli,
    commands::{doctor, transactions},
};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    centavo::db::init_schema(&conn).unwrap();
    conn.execute("INSERT INTO categories(name, icon) VALUES ('Electronics','shopping')", [])
        .unwrap();
    conn
}

fn run_tx(conn: &Connection, args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args.iter().copied());
    if let Some(("tx", sub)) = matches.subcommand() {
        transactions::handle(conn, sub).unwrap();
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn installment_purchase_expands_into_siblings() {
    let conn = setup();
    run_tx(
        &conn,
        &[
            "centavo", "tx", "add", "--date", "2025-01-31", "--desc", "TV", "--amount", "100",
            "--category", "Electronics", "--status", "pending", "--installments", "3",
        ],
    );

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 3);

    let mut stmt = conn
        .prepare(
            "SELECT date, amount, installment_number, installment_count, parent_id
             FROM transactions ORDER BY installment_number",
        )
        .unwrap();
    let rows: Vec<(String, String, u32, u32, Option<i64>)> = stmt
        .query_map([], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?))
        })
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    // Month-end dates clamp, amounts sum back to the total
    assert_eq!(rows[0].0, "2025-01-31");
    assert_eq!(rows[1].0, "2025-02-28");
    assert_eq!(rows[2].0, "2025-03-31");
    assert_eq!(rows[0].1, "33.33");
    assert_eq!(rows[2].1, "33.34");
    assert!(rows.iter().all(|r| r.3 == 3));

    // First row is the parent of the rest
    assert_eq!(rows[0].4, None);
    let first_id: i64 = conn
        .query_row(
            "SELECT id FROM transactions WHERE installment_number=1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(rows[1].4, Some(first_id));
    assert_eq!(rows[2].4, Some(first_id));
}

#[test]
fn recurring_template_expands_a_year_ahead() {
    let conn = setup();
    run_tx(
        &conn,
        &[
            "centavo", "tx", "add", "--date", "2025-01-10", "--desc", "Streaming", "--amount",
            "49.90", "--status", "pending", "--recur", "monthly", "--due", "2025-01-15",
        ],
    );

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM transactions WHERE is_recurring=1 AND recurrence_period='monthly'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(count, 12);

    let orphans: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM transactions WHERE parent_id IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 1);

    let last_due: String = conn
        .query_row(
            "SELECT due_date FROM transactions ORDER BY date DESC LIMIT 1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(last_due, "2025-12-15");
}

#[test]
fn recurring_rows_keep_installment_defaults() {
    let conn = setup();
    run_tx(
        &conn,
        &[
            "centavo", "tx", "add", "--date", "2025-01-10", "--desc", "Gym", "--amount", "80",
            "--status", "pending", "--recur", "monthly",
        ],
    );

    // Every occurrence is a whole transaction, never a numbered part
    let singles: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM transactions
             WHERE installment_number=1 AND installment_count=1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(singles, 12);

    assert!(doctor::scan(&conn).unwrap().is_empty());
}

#[test]
fn pay_settles_by_kind() {
    let conn = setup();
    run_tx(
        &conn,
        &[
            "centavo", "tx", "add", "--date", "2025-02-01", "--desc", "Invoice", "--amount",
            "250", "--kind", "income", "--status", "pending",
        ],
    );
    let id: i64 = conn
        .query_row("SELECT id FROM transactions", [], |r| r.get(0))
        .unwrap();

    run_tx(&conn, &["centavo", "tx", "pay", &id.to_string()]);

    let status: String = conn
        .query_row(
            "SELECT status FROM transactions WHERE id=?1",
            [id],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(status, "received");
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    for i in 1..=3 {
        run_tx(
            &conn,
            &[
                "centavo", "tx", "add", "--date", &format!("2025-01-0{}", i), "--desc", "Coffee",
                "--amount", "10",
            ],
        );
    }
    let matches = cli::build_cli().get_matches_from(["centavo", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-01-03");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_filters_by_kind_and_status() {
    let conn = setup();
    run_tx(
        &conn,
        &["centavo", "tx", "add", "--date", "2025-01-05", "--desc", "Pay", "--amount", "3000",
          "--kind", "income"],
    );
    run_tx(
        &conn,
        &["centavo", "tx", "add", "--date", "2025-01-06", "--desc", "Rent", "--amount", "1200",
          "--status", "pending"],
    );

    let matches =
        cli::build_cli().get_matches_from(["centavo", "tx", "list", "--status", "pending"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].description, "Rent");
        }
    }
}
