//! Core domain models and logic for planner
//!
//! This crate contains:
//! - Meeting days/times and their validation
//! - Activities (catalog courses and personal events)
//! - Conflict and duplicate detection
//! - The course catalog and the user's schedule

pub mod activity;
pub mod catalog;
pub mod course;
pub mod error;
pub mod event;
pub mod meeting;
pub mod schedule;

pub use activity::{Activity, ActivityKind, LongRow, ShortRow};
pub use catalog::Catalog;
pub use course::Course;
pub use error::{PlannerError, Result};
pub use event::Event;
pub use meeting::{Meeting, MeetingPattern, MeetingTime};
pub use schedule::{ConflictPair, DEFAULT_TITLE, Schedule};
