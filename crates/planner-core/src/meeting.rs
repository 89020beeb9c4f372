//! Meeting days and times
//!
//! Times are military-clock integers (`1330` is 1:30PM). Day patterns are
//! strings of single-letter day codes, validated against the rules of the
//! activity kind that owns them.

use serde::Serialize;

use crate::{PlannerError, Result};

/// Day code for an activity with no fixed meeting time
pub const ARRANGED: &str = "A";

const MAX_HOUR: i32 = 23;
const MAX_MINUTE: i32 = 59;

/// Day codes an activity kind may meet on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRules {
    pub allowed: &'static [char],
    /// Whether the kind accepts the "A" (arranged) pattern
    pub allows_arranged: bool,
}

impl DayRules {
    pub fn allows(&self, day: char) -> bool {
        self.allowed.contains(&day)
    }
}

pub const COURSE_DAYS: DayRules = DayRules {
    allowed: &['M', 'T', 'W', 'H', 'F'],
    allows_arranged: true,
};

pub const EVENT_DAYS: DayRules = DayRules {
    allowed: &['M', 'T', 'W', 'H', 'F', 'S', 'U'],
    allows_arranged: false,
};

/// Start and end of a meeting, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MeetingTime {
    start: u16,
    end: u16,
}

impl MeetingTime {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        let (start_hour, start_minute) = (start / 100, start % 100);
        let (end_hour, end_minute) = (end / 100, end % 100);

        if start_hour > MAX_HOUR
            || end_hour > MAX_HOUR
            || start_minute > MAX_MINUTE
            || end_minute > MAX_MINUTE
        {
            return Err(PlannerError::meeting(format!(
                "{start}-{end} is not a valid military time range"
            )));
        }
        if start > end {
            return Err(PlannerError::meeting(format!(
                "start time {start} is after end time {end}"
            )));
        }

        let start =
            u16::try_from(start).map_err(|_| PlannerError::meeting("start time is negative"))?;
        let end = u16::try_from(end).map_err(|_| PlannerError::meeting("end time is negative"))?;

        Ok(Self { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Closed-interval overlap: ranges touching at one minute overlap
    pub fn overlaps(&self, other: &MeetingTime) -> bool {
        (self.start <= other.start && other.start <= self.end)
            || (other.start <= self.start && self.start <= other.end)
    }
}

/// Render a military time as `h:mmAM` / `h:mmPM`
pub fn twelve_hour(time: u16) -> String {
    let mut hours = time / 100;
    let minutes = time % 100;

    let suffix = if hours >= 12 { "PM" } else { "AM" };
    if hours > 12 {
        hours -= 12;
    }
    if hours == 0 {
        hours = 12;
    }

    format!("{hours}:{minutes:02}{suffix}")
}

/// Ordered day codes, or the arranged marker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MeetingPattern {
    days: String,
    arranged: bool,
}

impl MeetingPattern {
    fn parse(days: &str, rules: DayRules) -> Result<Self> {
        if rules.allows_arranged && days == ARRANGED {
            return Ok(Self {
                days: days.to_string(),
                arranged: true,
            });
        }

        let mut seen = Vec::with_capacity(days.len());
        for day in days.chars() {
            if !rules.allows(day) {
                return Err(PlannerError::meeting(format!("'{day}' is not a valid day")));
            }
            if seen.contains(&day) {
                return Err(PlannerError::meeting(format!("'{day}' is listed twice")));
            }
            seen.push(day);
        }

        Ok(Self {
            days: days.to_string(),
            arranged: false,
        })
    }

    pub fn days(&self) -> &str {
        &self.days
    }

    pub fn is_arranged(&self) -> bool {
        self.arranged
    }

    pub fn contains(&self, day: char) -> bool {
        self.days.contains(day)
    }
}

/// Validated pattern and time, always replaced together
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Meeting {
    pattern: MeetingPattern,
    time: MeetingTime,
}

impl Meeting {
    /// Validate days, start and end as one unit.
    ///
    /// The day pattern is checked against `rules` before the times. An
    /// arranged pattern only passes when the kind allows it and both times
    /// are zero.
    pub fn new(days: &str, start: i32, end: i32, rules: DayRules) -> Result<Self> {
        if days.is_empty() {
            return Err(PlannerError::meeting("no meeting days given"));
        }

        let pattern = MeetingPattern::parse(days, rules)?;
        if pattern.is_arranged() && (start != 0 || end != 0) {
            return Err(PlannerError::meeting(
                "arranged meetings cannot have a start or end time",
            ));
        }
        let time = MeetingTime::new(start, end)?;

        Ok(Self { pattern, time })
    }

    pub fn pattern(&self) -> &MeetingPattern {
        &self.pattern
    }

    pub fn time(&self) -> MeetingTime {
        self.time
    }

    pub fn days(&self) -> &str {
        self.pattern.days()
    }

    pub fn start(&self) -> u16 {
        self.time.start()
    }

    pub fn end(&self) -> u16 {
        self.time.end()
    }

    pub fn is_arranged(&self) -> bool {
        self.pattern.is_arranged()
    }

    /// Human-readable days and times, e.g. `MW 1:30PM-2:45PM`
    pub fn meeting_string(&self) -> String {
        if self.days() == ARRANGED {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.days(),
            twelve_hour(self.start()),
            twelve_hour(self.end())
        )
    }

    /// True when both meetings share a day and their times overlap on it
    pub fn overlaps(&self, other: &Meeting) -> bool {
        self.days()
            .chars()
            .any(|day| other.pattern.contains(day) && self.time.overlaps(&other.time))
    }
}
