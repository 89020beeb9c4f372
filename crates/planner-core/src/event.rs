//! Free-form personal event

use std::fmt;

use serde::Serialize;

use crate::Result;
use crate::activity::{ActivityKind, LongRow, ShortRow, Slot};

/// A user-defined entry such as a study session or a shift at work.
///
/// Events may meet on weekends (`S`, `U`) but can never be arranged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    #[serde(flatten)]
    slot: Slot,
    details: String,
}

impl Event {
    pub fn new(
        title: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        details: impl Into<String>,
    ) -> Result<Self> {
        let slot = Slot::new(ActivityKind::Event, title, meeting_days, start_time, end_time)?;
        Ok(Self {
            slot,
            details: details.into(),
        })
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

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.slot.set_title(title)
    }

    pub fn set_meeting_days_and_time(&mut self, days: &str, start: i32, end: i32) -> Result<()> {
        self.slot.set_meeting(ActivityKind::Event, days, start, end)
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    pub fn short_display(&self) -> ShortRow {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            self.meeting_string(),
        ]
    }

    pub fn long_display(&self) -> LongRow {
        [
            String::new(),
            String::new(),
            self.title().to_string(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.details.clone(),
        ]
    }
}

/// Export record: `title,days,start,end,details`
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.title(),
            self.meeting_days(),
            self.start_time(),
            self.end_time(),
            self.details
        )
    }
}
