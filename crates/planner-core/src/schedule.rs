//! The user's schedule
//!
//! A schedule holds activities in the order they were added. Insertion
//! rejects duplicates (same course name, or same event title) but does not
//! reject time conflicts; use [`Schedule::conflicts`] to find those.

use serde::Serialize;
use tracing::debug;

use crate::activity::{LongRow, ShortRow};
use crate::{Activity, Catalog, Course, Event, PlannerError, Result};

pub const DEFAULT_TITLE: &str = "My Schedule";

/// Two scheduled activities, by position, whose meetings overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConflictPair {
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    title: String,
    #[serde(skip)]
    catalog: Catalog,
    activities: Vec<Activity>,
}

impl Schedule {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            catalog,
            activities: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the display title. An empty title is allowed; a missing one is not.
    pub fn set_title(&mut self, title: Option<&str>) -> Result<()> {
        let title = title.ok_or(PlannerError::InvalidTitle)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog.find(name, section)
    }

    /// Add the catalog course with this name and section.
    ///
    /// Returns `Ok(false)` when the catalog has no such course. Fails if a
    /// course with the same name (any section) is already scheduled.
    pub fn add_course(&mut self, name: &str, section: &str) -> Result<bool> {
        let Some(course) = self.catalog.find(name, section) else {
            debug!(name, section, "Course not in catalog");
            return Ok(false);
        };
        let candidate = Activity::Course(course.clone());

        if self.contains_duplicate(&candidate) {
            return Err(PlannerError::DuplicateActivity(format!(
                "You are already enrolled in {name}"
            )));
        }

        debug!(name, section, "Added course to schedule");
        self.activities.push(candidate);
        Ok(true)
    }

    /// Create an event and add it. Fails if the event is invalid or an event
    /// with the same title is already scheduled.
    pub fn add_event(
        &mut self,
        title: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        details: &str,
    ) -> Result<()> {
        let candidate = Activity::Event(Event::new(
            title,
            meeting_days,
            start_time,
            end_time,
            details,
        )?);

        if self.contains_duplicate(&candidate) {
            return Err(PlannerError::DuplicateActivity(format!(
                "You have already created an event called {title}"
            )));
        }

        debug!(title, meeting_days, "Added event to schedule");
        self.activities.push(candidate);
        Ok(())
    }

    fn contains_duplicate(&self, candidate: &Activity) -> bool {
        self.activities
            .iter()
            .any(|scheduled| scheduled.is_duplicate(candidate))
    }

    /// Remove the activity at `index`. Returns false if there is none.
    pub fn remove_activity(&mut self, index: usize) -> bool {
        if index >= self.activities.len() {
            return false;
        }
        let removed = self.activities.remove(index);
        debug!(index, title = removed.title(), "Removed activity from schedule");
        true
    }

    /// Drop every scheduled activity. The title and catalog are kept.
    pub fn reset(&mut self) {
        self.activities = Vec::new();
    }

    pub fn course_catalog(&self) -> Vec<ShortRow> {
        self.catalog.short_display()
    }

    pub fn scheduled_activities(&self) -> Vec<ShortRow> {
        self.activities.iter().map(Activity::short_display).collect()
    }

    pub fn full_scheduled_activities(&self) -> Vec<LongRow> {
        self.activities.iter().map(Activity::long_display).collect()
    }

    /// Every pair of scheduled activities whose meetings overlap
    pub fn conflicts(&self) -> Vec<ConflictPair> {
        let mut pairs = Vec::new();
        for (first, a) in self.activities.iter().enumerate() {
            for (second, b) in self.activities.iter().enumerate().skip(first + 1) {
                if a.check_conflict(b).is_err() {
                    pairs.push(ConflictPair { first, second });
                }
            }
        }
        pairs
    }
}
