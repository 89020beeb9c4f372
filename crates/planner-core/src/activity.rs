//! Activity model shared by courses and events
//!
//! Every activity owns a [`Slot`] (title plus meeting). The kind-specific
//! payload lives in [`Course`] or [`Event`], and [`Activity`] is the closed
//! union the schedule stores.

use std::fmt;

use serde::Serialize;

use crate::meeting::{COURSE_DAYS, DayRules, EVENT_DAYS, Meeting};
use crate::{Course, Event, PlannerError, Result};

/// Columns in the short display row
pub const SHORT_COLUMNS: usize = 4;
/// Columns in the long display row
pub const LONG_COLUMNS: usize = 7;

pub type ShortRow = [String; SHORT_COLUMNS];
pub type LongRow = [String; LONG_COLUMNS];

/// The two kinds of activity, and the day rules each one meets under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Course,
    Event,
}

impl ActivityKind {
    pub fn day_rules(self) -> DayRules {
        match self {
            ActivityKind::Course => COURSE_DAYS,
            ActivityKind::Event => EVENT_DAYS,
        }
    }
}

/// Title and meeting common to every activity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    title: String,
    meeting: Meeting,
}

impl Slot {
    pub(crate) fn new(
        kind: ActivityKind,
        title: &str,
        days: &str,
        start: i32,
        end: i32,
    ) -> Result<Self> {
        validate_title(title)?;
        let meeting = Meeting::new(days, start, end, kind.day_rules())?;
        Ok(Self {
            title: title.to_string(),
            meeting,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    pub(crate) fn set_title(&mut self, title: &str) -> Result<()> {
        validate_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub(crate) fn set_meeting(
        &mut self,
        kind: ActivityKind,
        days: &str,
        start: i32,
        end: i32,
    ) -> Result<()> {
        self.meeting = Meeting::new(days, start, end, kind.day_rules())?;
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(PlannerError::field("title", "title cannot be empty"));
    }
    Ok(())
}

/// Anything that occupies a titled time slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Course(_) => ActivityKind::Course,
            Activity::Event(_) => ActivityKind::Event,
        }
    }

    fn slot(&self) -> &Slot {
        match self {
            Activity::Course(course) => course.slot(),
            Activity::Event(event) => event.slot(),
        }
    }

    pub fn title(&self) -> &str {
        self.slot().title()
    }

    pub fn meeting(&self) -> &Meeting {
        self.slot().meeting()
    }

    pub fn meeting_string(&self) -> String {
        self.meeting().meeting_string()
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        match self {
            Activity::Course(course) => course.set_title(title),
            Activity::Event(event) => event.set_title(title),
        }
    }

    pub fn set_meeting_days_and_time(&mut self, days: &str, start: i32, end: i32) -> Result<()> {
        match self {
            Activity::Course(course) => course.set_meeting_days_and_time(days, start, end),
            Activity::Event(event) => event.set_meeting_days_and_time(days, start, end),
        }
    }

    /// Fail with a schedule conflict if the two activities share a day and
    /// their times overlap on it. Activities touching at a single minute
    /// conflict.
    pub fn check_conflict(&self, other: &Activity) -> Result<()> {
        if self.meeting().overlaps(other.meeting()) {
            return Err(PlannerError::conflict());
        }
        Ok(())
    }

    /// Same kind and same identity key: course name, or event title.
    pub fn is_duplicate(&self, other: &Activity) -> bool {
        match (self, other) {
            (Activity::Course(a), Activity::Course(b)) => a.name() == b.name(),
            (Activity::Event(a), Activity::Event(b)) => a.title() == b.title(),
            _ => false,
        }
    }

    /// `[name, section, title, meeting]`; events leave name and section blank
    pub fn short_display(&self) -> ShortRow {
        match self {
            Activity::Course(course) => course.short_display(),
            Activity::Event(event) => event.short_display(),
        }
    }

    /// `[name, section, title, credits, instructor, meeting, details]`
    pub fn long_display(&self) -> LongRow {
        match self {
            Activity::Course(course) => course.long_display(),
            Activity::Event(event) => event.long_display(),
        }
    }

    pub fn as_course(&self) -> Option<&Course> {
        match self {
            Activity::Course(course) => Some(course),
            Activity::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Activity::Event(event) => Some(event),
            Activity::Course(_) => None,
        }
    }
}

impl From<Course> for Activity {
    fn from(course: Course) -> Self {
        Activity::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Self {
        Activity::Event(event)
    }
}

/// Export record, one line per activity
impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Course(course) => write!(f, "{course}"),
            Activity::Event(event) => write!(f, "{event}"),
        }
    }
}
