//! Error types for planner-records

use std::path::PathBuf;

use planner_core::PlannerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordError>;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Cannot read course catalog {path}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save schedule to {path}")]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error(transparent)]
    Invalid(#[from] PlannerError),
}
