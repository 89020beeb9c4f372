//! Flat-file records for planner
//!
//! This crate provides:
//! - Course catalog loading (one course per line)
//! - Schedule export (one activity per line)

pub mod catalog;
pub mod error;
pub mod export;

pub use catalog::{parse_course_record, read_course_records, read_course_records_from};
pub use error::{RecordError, Result};
pub use export::{export_schedule, write_activity_records, write_activity_records_to};
