//! Course catalog
//!
//! Courses in load order. A later course with the same name and section as an
//! earlier one is dropped.

use serde::Serialize;

use crate::Course;
use crate::activity::ShortRow;

/// Courses available for scheduling, unique by name and section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from courses in order, keeping the first of any
    /// `(name, section)` repeat
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            catalog.insert(course);
        }
        catalog
    }

    /// Append a course unless its name and section are already listed.
    ///
    /// Returns whether the course was added.
    pub fn insert(&mut self, course: Course) -> bool {
        if self.find(course.name(), course.section()).is_some() {
            return false;
        }
        self.courses.push(course);
        true
    }

    pub fn find(&self, name: &str, section: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|course| course.name() == name && course.section() == section)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn short_display(&self) -> Vec<ShortRow> {
        self.courses.iter().map(Course::short_display).collect()
    }
}
