// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("centavo")
        .version(crate_version!())
        .about("Personal finance: bills, installments, goals, and benchmark tracking")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").required(true))
                        .arg(
                            Arg::new("icon")
                                .long("icon")
                                .help("Icon identifier (unknown names fall back to 'other')"),
                        ),
                )
                .subcommand(Command::new("list").about("List categories"))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction (optionally split or recurring)")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("description").long("desc").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount; --kind tells expense from income"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["expense", "income"])
                                .default_value("expense"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .value_parser(["paid", "pending", "received", "overdue"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("due").long("due").help("Due date, YYYY-MM-DD"))
                        .arg(
                            Arg::new("installments")
                                .long("installments")
                                .value_parser(value_parser!(u32))
                                .conflicts_with("recur")
                                .help("Split into N monthly installments"),
                        )
                        .arg(
                            Arg::new("recur")
                                .long("recur")
                                .value_parser(["daily", "weekly", "monthly", "yearly"])
                                .help("Repeat at this cadence for the next 12 occurrences"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["expense", "income"]),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .value_parser(["paid", "pending", "received", "overdue"]),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("pay")
                        .about("Settle a pending transaction")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("bills")
                .about("Due-date views")
                .subcommand(json_flags(
                    Command::new("upcoming")
                        .about("Pending bills with due dates, flagged overdue/today")
                        .arg(Arg::new("month").long("month").help("Filter by due month, YYYY-MM")),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("title").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("description").long("desc"))
                        .arg(Arg::new("deadline").long("deadline").help("YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("contribute")
                        .about("Add to a goal's saved amount")
                        .arg(Arg::new("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Goals with progress and daily-savings projection"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a goal")
                        .arg(Arg::new("title").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("health")
                .about("Financial health score for a month")
                .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to current")),
        ))
        .subcommand(
            Command::new("perf")
                .about("Portfolio vs benchmark returns")
                .subcommand(
                    Command::new("set")
                        .about("Record monthly returns (percent)")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("portfolio").long("portfolio").required(true))
                        .arg(Arg::new("cdi").long("cdi").required(true))
                        .arg(Arg::new("ibov").long("ibov").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Compare portfolio against CDI and IBOV")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to latest")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Monthly income, expense, and savings rate")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("allocation")
                        .about("Expense share per category for a month")
                        .arg(Arg::new("month").long("month").required(true)),
                )),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("set-currency")
                        .about("Set the currency symbol shown in tables")
                        .arg(Arg::new("symbol").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
