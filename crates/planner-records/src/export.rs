//! Schedule export, one activity record per line

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use planner_core::{Activity, Schedule};
use tracing::info;

use crate::{RecordError, Result};

/// Write activity records to `path`, replacing any existing file
pub fn write_activity_records(path: impl AsRef<Path>, activities: &[Activity]) -> Result<()> {
    let path = path.as_ref();
    let failed = |source| RecordError::ExportFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(failed)?;
    let mut writer = BufWriter::new(file);
    write_activity_records_to(&mut writer, activities).map_err(failed)?;
    writer.flush().map_err(failed)?;

    info!(
        path = %path.display(),
        activities = activities.len(),
        "Exported schedule"
    );
    Ok(())
}

pub fn write_activity_records_to(
    writer: &mut impl Write,
    activities: &[Activity],
) -> std::io::Result<()> {
    for activity in activities {
        writeln!(writer, "{activity}")?;
    }
    Ok(())
}

pub fn export_schedule(schedule: &Schedule, path: impl AsRef<Path>) -> Result<()> {
    write_activity_records(path, schedule.activities())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{Course, Event};

    #[test]
    fn test_records_in_order() {
        let activities: Vec<Activity> = vec![
            Course::new(
                "CSC 216",
                "Software Development Fundamentals",
                "001",
                3,
                "sesmith5",
                "MW",
                1330,
                1445,
            )
            .unwrap()
            .into(),
            Course::arranged("CSC 217", "Software Development Fundamentals Lab", "211", 1, "sesmith5")
                .unwrap()
                .into(),
            Event::new("Exercise", "MWFSU", 700, 745, "Carmichael")
                .unwrap()
                .into(),
        ];

        let mut out = Vec::new();
        write_activity_records_to(&mut out, &activities).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445\n\
             CSC 217,Software Development Fundamentals Lab,211,1,sesmith5,A\n\
             Exercise,MWFSU,700,745,Carmichael\n"
        );
    }

    #[test]
    fn test_empty_schedule_writes_empty_file() {
        let mut out = Vec::new();
        write_activity_records_to(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
