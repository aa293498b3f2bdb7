// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, CategoryIcon};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            // Unknown icon names resolve to the fallback variant up front,
            // so the table only ever holds known identifiers.
            let icon = sub
                .get_one::<String>("icon")
                .map(|s| CategoryIcon::from_name(s))
                .unwrap_or(CategoryIcon::Other);
            conn.execute(
                "INSERT INTO categories(name, icon) VALUES (?1, ?2)",
                params![name, icon.as_str()],
            )?;
            println!("Added category '{}' {}", name, icon.glyph());
        }
        Some(("list", _)) => {
            let mut stmt = conn.prepare("SELECT id, name, icon FROM categories ORDER BY name")?;
            let rows = stmt.query_map([], |r| {
                Ok(Category {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    icon: CategoryIcon::from_name(&r.get::<_, String>(2)?),
                })
            })?;
            let mut data = Vec::new();
            for row in rows {
                let c = row?;
                data.push(vec![
                    c.icon.glyph().to_string(),
                    c.name,
                    c.icon.as_str().to_string(),
                ]);
            }
            println!("{}", pretty_table(&["", "Category", "Icon"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            conn.execute("DELETE FROM categories WHERE name=?1", params![name])?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
