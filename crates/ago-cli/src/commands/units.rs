//! Implementation of the `ago units` command.

use ago::Unit;
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Arguments for the units command.
#[derive(Debug, clap::Args)]
pub struct UnitsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single unit row.
#[derive(Serialize)]
struct UnitRow {
    unit: &'static str,
    threshold_ms: i64,
}

/// Run the units command.
pub fn run_units(args: UnitsArgs) -> miette::Result<i32> {
    if args.json {
        let rows: Vec<UnitRow> = Unit::ALL
            .into_iter()
            .map(|unit| UnitRow {
                unit: unit.name(),
                threshold_ms: unit.threshold_ms(),
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows)
            .map_err(|e| miette::miette!("Failed to serialize units: {}", e))?;
        println!("{json}");
        return Ok(exitcode::OK);
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Unit", "Threshold (ms)"]);
    for unit in Unit::ALL {
        table.add_row(vec![unit.name().to_string(), unit.threshold_ms().to_string()]);
    }
    println!("{table}");

    Ok(exitcode::OK)
}
