//! Catalog course

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::activity::{ActivityKind, LongRow, ShortRow, Slot};
use crate::meeting::ARRANGED;
use crate::{PlannerError, Result};

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 8;
const MIN_CREDITS: i32 = 1;
const MAX_CREDITS: i32 = 5;

lazy_static! {
    // 1-4 letters, one separator, 3 digits. The separator is a Unicode
    // separator or ASCII control whitespace other than tab; no-break spaces
    // do not count.
    static ref COURSE_NAME: Regex = Regex::new(
        r"^\p{L}{1,4}[[\p{Z}\n\x0B\x0C\r\x1C-\x1F]&&[^\x{A0}\x{2007}\x{202F}]]\d{3}$"
    )
    .expect("course name pattern");
    static ref SECTION: Regex = Regex::new(r"^\d{3}$").expect("section pattern");
}

/// A course offered in the catalog, e.g. `CSC 216` section `001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    #[serde(flatten)]
    slot: Slot,
    name: String,
    section: String,
    credits: u8,
    instructor_id: String,
}

impl Course {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        title: &str,
        section: &str,
        credits: i32,
        instructor_id: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self> {
        let slot = Slot::new(ActivityKind::Course, title, meeting_days, start_time, end_time)?;
        validate_name(name)?;
        validate_section(section)?;
        let credits = validate_credits(credits)?;
        validate_instructor_id(instructor_id)?;

        Ok(Self {
            slot,
            name: name.to_string(),
            section: section.to_string(),
            credits,
            instructor_id: instructor_id.to_string(),
        })
    }

    /// Course with no fixed meeting time
    pub fn arranged(
        name: &str,
        title: &str,
        section: &str,
        credits: i32,
        instructor_id: &str,
    ) -> Result<Self> {
        Self::new(name, title, section, credits, instructor_id, ARRANGED, 0, 0)
    }

    pub(crate) fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn title(&self) -> &str {
        self.slot.title()
    }

    pub fn meeting_days(&self) -> &str {
        self.slot.meeting().days()
    }

    pub fn start_time(&self) -> u16 {
        self.slot.meeting().start()
    }

    pub fn end_time(&self) -> u16 {
        self.slot.meeting().end()
    }

    pub fn meeting_string(&self) -> String {
        self.slot.meeting().meeting_string()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.slot.set_title(title)
    }

    pub fn set_meeting_days_and_time(&mut self, days: &str, start: i32, end: i32) -> Result<()> {
        self.slot.set_meeting(ActivityKind::Course, days, start, end)
    }

    pub fn set_section(&mut self, section: &str) -> Result<()> {
        validate_section(section)?;
        self.section = section.to_string();
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> Result<()> {
        self.credits = validate_credits(credits)?;
        Ok(())
    }

    pub fn set_instructor_id(&mut self, instructor_id: &str) -> Result<()> {
        validate_instructor_id(instructor_id)?;
        self.instructor_id = instructor_id.to_string();
        Ok(())
    }

    pub fn short_display(&self) -> ShortRow {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    pub fn long_display(&self) -> LongRow {
        [
            self.name.clone(),
            self.section.clone(),
            self.title().to_string(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }
}

/// Catalog record: `name,title,section,credits,instructor,days[,start,end]`
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.title(),
            self.section,
            self.credits,
            self.instructor_id,
            self.meeting_days()
        )?;
        if self.meeting_days() != ARRANGED {
            write!(f, ",{},{}", self.start_time(), self.end_time())?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(PlannerError::field(
            "course name",
            format!("'{name}' must be {MIN_NAME_LENGTH}-{MAX_NAME_LENGTH} characters"),
        ));
    }
    if !COURSE_NAME.is_match(name) {
        return Err(PlannerError::field(
            "course name",
            format!("'{name}' must be 1-4 letters, a space, and 3 digits"),
        ));
    }
    Ok(())
}

fn validate_section(section: &str) -> Result<()> {
    if !SECTION.is_match(section) {
        return Err(PlannerError::field(
            "section",
            format!("'{section}' must be exactly 3 digits"),
        ));
    }
    Ok(())
}

fn validate_credits(credits: i32) -> Result<u8> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(PlannerError::field(
            "credits",
            format!("{credits} is outside {MIN_CREDITS}-{MAX_CREDITS}"),
        ));
    }
    u8::try_from(credits).map_err(|_| PlannerError::field("credits", credits.to_string()))
}

fn validate_instructor_id(instructor_id: &str) -> Result<()> {
    if instructor_id.is_empty() {
        return Err(PlannerError::field(
            "instructor id",
            "instructor id cannot be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csc216() -> Course {
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
    }

    fn with_name(name: &str) -> Result<Course> {
        Course::new(name, "Title", "001", 3, "id", "MW", 1330, 1445)
    }

    #[test]
    fn test_valid_names() {
        for name in [
            "E 115", "CSC 216", "MA 141", "ABCD 123", "É 100", "CSC\u{1F}216", "CSC\u{2003}216",
        ] {
            assert!(with_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "", "CSC216", "C 21", "ABCDE 123", "CSC\t216", "CSC  216", "CSC 2167", "CSC 21A",
            "1SC 216", "CS-216", "ABCDE123", "CSC\u{A0}216", "CSC\u{202F}216", "CSC\u{85}216",
        ] {
            let err = with_name(name).unwrap_err();
            assert!(
                matches!(err, PlannerError::InvalidField { field: "course name", .. }),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn test_section_and_credits() {
        let mut course = csc216();
        assert!(course.set_section("01").is_err());
        assert!(course.set_section("0a1").is_err());
        assert!(course.set_section("0011").is_err());
        assert_eq!(course.section(), "001");
        course.set_section("602").unwrap();
        assert_eq!(course.section(), "602");

        assert!(course.set_credits(0).is_err());
        assert!(course.set_credits(6).is_err());
        assert_eq!(course.credits(), 3);
        course.set_credits(5).unwrap();
        assert_eq!(course.credits(), 5);
    }

    #[test]
    fn test_instructor_and_title() {
        let mut course = csc216();
        assert!(course.set_instructor_id("").is_err());
        assert!(course.set_title("").is_err());
        assert_eq!(course.instructor_id(), "sesmith5");
        assert_eq!(course.title(), "Software Development Fundamentals");
    }

    #[test]
    fn test_failed_meeting_update_keeps_state() {
        let mut course = csc216();
        assert!(course.set_meeting_days_and_time("TH", 1500, 1400).is_err());
        assert!(course.set_meeting_days_and_time("A", 900, 1000).is_err());
        assert_eq!(course.meeting_days(), "MW");
        assert_eq!((course.start_time(), course.end_time()), (1330, 1445));
    }

    #[test]
    fn test_display_rows() {
        let course = csc216();
        assert_eq!(
            course.short_display(),
            ["CSC 216", "001", "Software Development Fundamentals", "MW 1:30PM-2:45PM"]
        );
        assert_eq!(
            course.long_display(),
            [
                "CSC 216",
                "001",
                "Software Development Fundamentals",
                "3",
                "sesmith5",
                "MW 1:30PM-2:45PM",
                ""
            ]
        );
    }

    #[test]
    fn test_record_line() {
        assert_eq!(
            csc216().to_string(),
            "CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445"
        );

        let arranged = Course::arranged("CSC 217", "Lab", "601", 1, "sesmith5").unwrap();
        assert_eq!(arranged.to_string(), "CSC 217,Lab,601,1,sesmith5,A");
        assert_eq!(arranged.meeting_string(), "Arranged");
    }
}
