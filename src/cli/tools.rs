//! The `tools` command: list the rentable catalog.

use std::path::Path;

use tabled::{Table, Tabled};

use super::output;
use crate::adapter::JsonCatalog;
use crate::domain::Tool;
use crate::error::Result;

#[derive(Tabled)]
struct ToolRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Type")]
    tool_type: String,
    #[tabled(rename = "Brand")]
    brand: String,
    #[tabled(rename = "Daily")]
    daily: String,
    #[tabled(rename = "Weekday")]
    weekday: &'static str,
    #[tabled(rename = "Weekend")]
    weekend: &'static str,
    #[tabled(rename = "Holiday")]
    holiday: &'static str,
}

impl ToolRow {
    fn from_tool(tool: &Tool) -> Self {
        let ty = tool.tool_type();
        Self {
            code: tool.code().to_string(),
            tool_type: ty.name().to_owned(),
            brand: tool.brand().to_owned(),
            daily: format!("${:.2}", ty.daily_charge()),
            weekday: charge_mark(ty.weekday_charge()),
            weekend: charge_mark(ty.weekend_charge()),
            holiday: charge_mark(ty.holiday_charge()),
        }
    }
}

fn charge_mark(charged: bool) -> &'static str {
    if charged {
        "yes"
    } else {
        "free"
    }
}

/// List every tool in the catalog with its charge policy.
pub fn execute(catalog_path: &Path) -> Result<()> {
    let catalog = JsonCatalog::load(catalog_path)?;

    output::section("Available tools");
    println!();

    let rows: Vec<ToolRow> = catalog.tools().into_iter().map(ToolRow::from_tool).collect();
    let count = rows.len();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    println!();
    output::note(&format!("  {count} tools on hand"));

    Ok(())
}
