//! Stats command implementation
//!
//! Prints the summary statistics of one tensor file, either as colored
//! key-value text or as a JSON report.

use std::path::Path;

use frostt::{collect_stats, StatOverrides, TensorStats};
use serde::Serialize;

use crate::commands::validate_path;
use crate::error::Result;
use crate::output;

/// Stats report for JSON output
#[derive(Serialize)]
struct StatsReport<'a> {
    file: String,
    order: usize,
    nnz: u64,
    dims: &'a [u64],
    density: f64,
}

/// Run the stats command
pub(crate) fn run(
    path: &Path,
    nnz: Option<u64>,
    dims: Option<Vec<u64>>,
    json_output: bool,
) -> Result<()> {
    let overrides = StatOverrides {
        order: dims.as_ref().map(Vec::len),
        nonzeros: nnz,
        dims,
    };

    // With a complete override set the file is never opened, so a
    // nonexistent path is not an error.
    if !overrides.is_complete() {
        validate_path(path)?;
    }

    let stats = collect_stats(Some(path), overrides)?;

    if json_output {
        print_json(path, &stats);
    } else {
        print_text(path, &stats);
    }

    Ok(())
}

fn print_json(path: &Path, stats: &TensorStats) {
    let report = StatsReport {
        file: path.display().to_string(),
        order: stats.order,
        nnz: stats.nonzeros,
        dims: &stats.dims,
        density: stats.density,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => output::error(&format!("failed to serialize report: {e}")),
    }
}

fn print_text(path: &Path, stats: &TensorStats) {
    output::section("Tensor Statistics");
    output::kv("File", path.display());
    output::kv("Order", stats.order);
    output::kv("Non-zeros", output::format_count(stats.nonzeros));
    let dims: Vec<String> = stats.dims.iter().map(|d| d.to_string()).collect();
    output::kv("Dims", dims.join(" x "));
    output::kv("Density", output::format_density(stats.density));
}
