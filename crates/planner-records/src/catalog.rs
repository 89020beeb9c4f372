//! Course catalog reader
//!
//! Each line is `name,title,section,credits,instructor,days[,start,end]`.
//! The start/end pair is absent exactly when days is `A`. Lines that do not
//! parse into a valid course, and repeats of an earlier name and section, are
//! skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use planner_core::meeting::ARRANGED;
use planner_core::{Catalog, Course};
use tracing::{debug, info};

use crate::{RecordError, Result};

/// Load a catalog file. Only an unreadable file is an error.
pub fn read_course_records(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let unreadable = |source| RecordError::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let catalog = read_course_records_from(BufReader::new(file)).map_err(unreadable)?;

    info!(
        path = %path.display(),
        courses = catalog.len(),
        "Loaded course catalog"
    );
    Ok(catalog)
}

/// Read catalog lines from any buffered source
///
/// A line that is not valid UTF-8 is skipped like any other bad record; only
/// a failing read is an error.
pub fn read_course_records_from(mut reader: impl BufRead) -> std::io::Result<Catalog> {
    let mut catalog = Catalog::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match String::from_utf8(raw.to_vec()) {
            Ok(line) => line,
            Err(e) => {
                debug!(line_number, error = %e, "Skipping course record that is not UTF-8");
                continue;
            }
        };

        match parse_course_record(&line) {
            Ok(course) => {
                let (name, section) = (course.name().to_string(), course.section().to_string());
                if !catalog.insert(course) {
                    debug!(line_number, %name, %section, "Skipping duplicate course");
                }
            }
            Err(e) => debug!(line_number, error = %e, "Skipping invalid course record"),
        }
    }

    Ok(catalog)
}

/// Parse one catalog line into a validated course
pub fn parse_course_record(line: &str) -> Result<Course> {
    let mut fields = line.split(',').map(str::trim);

    let name = next_field(&mut fields, "name")?;
    let title = next_field(&mut fields, "title")?;
    let section = next_field(&mut fields, "section")?;
    let credits = parse_number(next_field(&mut fields, "credits")?, "credits")?;
    let instructor_id = next_field(&mut fields, "instructor id")?;
    let meeting_days = next_field(&mut fields, "meeting days")?;

    if meeting_days == ARRANGED {
        if has_extra_field(fields) {
            return Err(RecordError::Malformed(format!(
                "arranged course {name} has a meeting time"
            )));
        }
        return Ok(Course::arranged(
            name,
            title,
            section,
            credits,
            instructor_id,
        )?);
    }

    let start_time = parse_number(next_field(&mut fields, "start time")?, "start time")?;
    let end_time = parse_number(next_field(&mut fields, "end time")?, "end time")?;
    if has_extra_field(fields) {
        return Err(RecordError::Malformed(format!(
            "too many fields for course {name}"
        )));
    }

    Ok(Course::new(
        name,
        title,
        section,
        credits,
        instructor_id,
        meeting_days,
        start_time,
        end_time,
    )?)
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>, field: &str) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| RecordError::Malformed(format!("missing {field}")))
}

/// A single trailing `,` closes the record without adding a field
fn has_extra_field<'a>(mut fields: impl Iterator<Item = &'a str>) -> bool {
    match fields.next() {
        None => false,
        Some("") => fields.next().is_some(),
        Some(_) => true,
    }
}

fn parse_number(value: &str, field: &str) -> Result<i32> {
    value
        .parse()
        .map_err(|_| RecordError::Malformed(format!("{field} '{value}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::PlannerError;

    #[test]
    fn test_parse_timed_course() {
        let course = parse_course_record(
            "CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445",
        )
        .unwrap();

        assert_eq!(course.name(), "CSC 216");
        assert_eq!(course.title(), "Software Development Fundamentals");
        assert_eq!(course.section(), "001");
        assert_eq!(course.credits(), 3);
        assert_eq!(course.instructor_id(), "sesmith5");
        assert_eq!(course.meeting_string(), "MW 1:30PM-2:45PM");
    }

    #[test]
    fn test_parse_arranged_course() {
        let course =
            parse_course_record("CSC 217,Software Development Fundamentals Lab,211,1,sesmith5,A")
                .unwrap();
        assert_eq!(course.meeting_days(), "A");
        assert_eq!(course.meeting_string(), "Arranged");
    }

    #[test]
    fn test_round_trips_display() {
        for line in [
            "CSC 116,Intro to Programming - Java,003,3,jtking,MW,1250,1440",
            "CSC 217,Software Development Fundamentals Lab,211,1,sesmith5,A",
        ] {
            assert_eq!(parse_course_record(line).unwrap().to_string(), line);
        }
    }

    #[test]
    fn test_extra_fields_rejected() {
        assert!(matches!(
            parse_course_record("CSC 217,Lab,211,1,sesmith5,A,0,0"),
            Err(RecordError::Malformed(_))
        ));
        assert!(matches!(
            parse_course_record("CSC 216,SDF,001,3,sesmith5,MW,1330,1445,extra"),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn test_trailing_comma_ends_record() {
        let course =
            parse_course_record("CSC 230,C and Software Tools,001,3,dbsturgi,MW,1145,1300,")
                .unwrap();
        assert_eq!(course.meeting_string(), "MW 11:45AM-1:00PM");

        let course = parse_course_record("CSC 217,Lab,211,1,sesmith5,A,").unwrap();
        assert_eq!(course.meeting_days(), "A");

        for line in [
            "CSC 230,C and Software Tools,001,3,dbsturgi,MW,1145,1300,,",
            "CSC 230,C and Software Tools,001,3,dbsturgi,MW,1145,1300,,extra",
            "CSC 217,Lab,211,1,sesmith5,A,,",
        ] {
            assert!(
                matches!(parse_course_record(line), Err(RecordError::Malformed(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_missing_or_bad_fields() {
        for line in [
            "",
            "CSC 216,SDF,001",
            "CSC 216,SDF,001,three,sesmith5,MW,1330,1445",
            "CSC 216,SDF,001,3,sesmith5,MW,1330",
            "CSC 216,SDF,001,3,sesmith5,MW,1:30,1445",
        ] {
            assert!(
                matches!(parse_course_record(line), Err(RecordError::Malformed(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_domain_validation_applies() {
        assert!(matches!(
            parse_course_record("CSC216,SDF,001,3,sesmith5,MW,1330,1445"),
            Err(RecordError::Invalid(PlannerError::InvalidField { .. }))
        ));
        assert!(matches!(
            parse_course_record("CSC 216,SDF,001,3,sesmith5,MS,1330,1445"),
            Err(RecordError::Invalid(PlannerError::InvalidMeetingSpec(_)))
        ));
    }

    #[test]
    fn test_reader_skips_invalid_and_duplicates() {
        let input = "\
CSC 116,Intro to Programming - Java,001,3,jdyoung2,MW,910,1100
CSC 116,Intro to Programming - Java,001,3,someone,TH,910,1100
garbage line
CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445
CSC 216,Software Development Fundamentals,601,3,jctetter,A
";
        let catalog = read_course_records_from(input.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 3);
        let first = catalog.find("CSC 116", "001").unwrap();
        assert_eq!(first.instructor_id(), "jdyoung2");
        assert!(catalog.find("CSC 216", "601").is_some());
    }

    #[test]
    fn test_reader_skips_non_utf8_line() {
        let mut input = Vec::new();
        input.extend_from_slice(b"CSC 116,Intro to Programming - Java,001,3,jdyoung2,MW,910,1100\n");
        input.extend_from_slice(b"\xff\xfe bad line\n");
        input.extend_from_slice(b"CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445\r\n");

        let catalog = read_course_records_from(input.as_slice()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("CSC 116", "001").is_some());
        assert_eq!(
            catalog.find("CSC 216", "001").unwrap().meeting_string(),
            "MW 1:30PM-2:45PM"
        );
    }
}
