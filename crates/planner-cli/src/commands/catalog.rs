use std::path::PathBuf;

use anyhow::Result;
use planner_config::{Config, OutputFormat};
use planner_records::read_course_records;

use super::{format_table, resolve_catalog};

pub fn handle(catalog: Option<PathBuf>, json: bool, config: &Config) -> Result<()> {
    let path = resolve_catalog(catalog, config)?;
    let catalog = read_course_records(&path)?;

    if json || config.display.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog.courses())?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No courses found in {}.", path.display());
        return Ok(());
    }

    println!("Catalog: {} ({} courses)\n", path.display(), catalog.len());
    print!(
        "{}",
        format_table(
            ["Name", "Section", "Title", "Meeting"],
            &catalog.short_display()
        )
    );

    Ok(())
}
