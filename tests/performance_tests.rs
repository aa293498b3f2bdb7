// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use centavo::commands::performance::query_view;
use centavo::metrics::performance::{self, Trend};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn deltas_are_plain_differences() {
    let s = performance::compare(dec("10"), dec("8"), dec("12"));
    assert_eq!(s.vs_cdi, dec("2"));
    assert_eq!(s.vs_ibov, dec("-2"));
    assert_eq!(Trend::classify(s.vs_cdi), Trend::Positive);
    assert_eq!(Trend::classify(s.vs_ibov), Trend::Negative);
}

#[test]
fn matching_benchmark_is_neutral() {
    let s = performance::compare(dec("7.5"), dec("7.5"), dec("3"));
    assert_eq!(s.vs_cdi, Decimal::ZERO);
    assert_eq!(Trend::classify(s.vs_cdi), Trend::Neutral);
}

#[test]
fn delta_formatting_signs_gains() {
    assert_eq!(performance::fmt_delta(dec("2")), "+2.00%");
    assert_eq!(performance::fmt_delta(dec("-2")), "-2.00%");
    assert_eq!(performance::fmt_delta(Decimal::ZERO), "0.00%");
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    centavo::db::init_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO benchmarks(month, portfolio_return, cdi_return, ibov_return)
            VALUES ('2025-01', '1.20', '0.90', '2.00');
        INSERT INTO benchmarks(month, portfolio_return, cdi_return, ibov_return)
            VALUES ('2025-02', '0.50', '0.80', '-1.00');
        "#,
    )
    .unwrap();
    conn
}

#[test]
fn view_defaults_to_latest_month() {
    let conn = setup();
    let view = query_view(&conn, None).unwrap();
    assert_eq!(view.month, "2025-02");
    assert_eq!(view.snapshot.vs_cdi, dec("-0.30"));
    assert_eq!(view.cdi_trend, Trend::Negative);
    assert_eq!(view.snapshot.vs_ibov, dec("1.50"));
    assert_eq!(view.ibov_trend, Trend::Positive);
}

#[test]
fn view_honors_explicit_month() {
    let conn = setup();
    let view = query_view(&conn, Some("2025-01")).unwrap();
    assert_eq!(view.snapshot.vs_cdi, dec("0.30"));
    assert_eq!(view.snapshot.vs_ibov, dec("-0.80"));
}

#[test]
fn absent_month_error_names_the_month() {
    let conn = setup();
    let err = query_view(&conn, Some("2024-01")).unwrap_err();
    assert!(err.to_string().contains("2024-01"));
}

#[test]
fn empty_table_is_a_user_error() {
    let conn = Connection::open_in_memory().unwrap();
    centavo::db::init_schema(&conn).unwrap();
    assert!(query_view(&conn, None).is_err());
}
