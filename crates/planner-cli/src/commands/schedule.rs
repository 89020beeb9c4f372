use anyhow::{Context, Result};
use planner_config::{Config, OutputFormat};
use planner_core::{Activity, ConflictPair, Schedule};
use planner_records::{export_schedule, read_course_records};
use serde::Serialize;
use tracing::warn;

use super::{format_table, resolve_catalog};
use crate::cli::ScheduleArgs;

#[derive(Serialize)]
struct ScheduleView<'a> {
    title: &'a str,
    activities: &'a [Activity],
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicts: Option<Vec<ConflictPair>>,
}

pub fn handle(args: ScheduleArgs, config: &Config) -> Result<()> {
    let path = resolve_catalog(args.catalog, config)?;
    let mut schedule = Schedule::new(read_course_records(&path)?);

    let title = args.title.unwrap_or_else(|| config.schedule.title.clone());
    schedule.set_title(Some(title.as_str()))?;

    for course in &args.courses {
        let added = schedule
            .add_course(&course.name, &course.section)
            .with_context(|| format!("Cannot add {course}"))?;
        if !added {
            warn!(name = %course.name, section = %course.section, "Course not in catalog");
            eprintln!("  Warning: {course} is not in {}", path.display());
        }
    }

    for event in &args.events {
        schedule
            .add_event(
                &event.title,
                &event.days,
                event.start,
                event.end,
                &event.details,
            )
            .with_context(|| format!("Cannot add event '{}'", event.title))?;
    }

    let conflicts = args.conflicts.then(|| schedule.conflicts());

    if args.json || config.display.format == OutputFormat::Json {
        let view = ScheduleView {
            title: schedule.title(),
            activities: schedule.activities(),
            conflicts,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_schedule(&schedule, args.full);
        if let Some(conflicts) = &conflicts {
            print_conflicts(&schedule, conflicts);
        }
    }

    if let Some(export) = args.export {
        let export_path = export.unwrap_or_else(|| config.export.path.clone());
        export_schedule(&schedule, &export_path)?;
        eprintln!(
            "✓ Exported {} activities to {}",
            schedule.len(),
            export_path.display()
        );
    }

    Ok(())
}

fn print_schedule(schedule: &Schedule, full: bool) {
    println!("{}\n", schedule.title());

    if schedule.is_empty() {
        println!("No activities scheduled.");
        return;
    }

    let table = if full {
        format_table(
            [
                "Name",
                "Section",
                "Title",
                "Credits",
                "Instructor",
                "Meeting",
                "Details",
            ],
            &schedule.full_scheduled_activities(),
        )
    } else {
        format_table(
            ["Name", "Section", "Title", "Meeting"],
            &schedule.scheduled_activities(),
        )
    };
    print!("{table}");
}

fn print_conflicts(schedule: &Schedule, conflicts: &[ConflictPair]) {
    if conflicts.is_empty() {
        println!("\nNo conflicts.");
        return;
    }

    let activities = schedule.activities();
    println!("\nConflicts ({}):", conflicts.len());
    for pair in conflicts {
        let (a, b) = (&activities[pair.first], &activities[pair.second]);
        println!(
            "  {} ({}) overlaps {} ({})",
            a.title(),
            a.meeting_string(),
            b.title(),
            b.meeting_string()
        );
    }
}
