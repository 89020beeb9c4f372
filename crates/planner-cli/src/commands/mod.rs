pub mod catalog;
pub mod completions;
pub mod config;
pub mod schedule;

use std::path::PathBuf;

use anyhow::Result;
use planner_config::Config;

/// Catalog file from the command line, falling back to the config
pub fn resolve_catalog(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.catalog.path.clone()).ok_or_else(|| {
        anyhow::anyhow!("No catalog file given. Pass --catalog or set [catalog] path in the config")
    })
}

/// Render rows as left-aligned columns under a header line
pub fn format_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: [&str; N]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_line(headers);
    for row in rows {
        push_line(row.each_ref().map(String::as_str));
    }
    out
}
