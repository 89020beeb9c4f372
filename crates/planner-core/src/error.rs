use thiserror::Error;

/// Message carried by a conflict raised without a custom description.
pub const DEFAULT_CONFLICT_MESSAGE: &str = "Schedule conflict.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid meeting days and times: {0}")]
    InvalidMeetingSpec(String),

    #[error("{0}")]
    ScheduleConflict(String),

    #[error("{0}")]
    DuplicateActivity(String),

    #[error("Schedule title is required")]
    InvalidTitle,
}

impl PlannerError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn meeting(reason: impl Into<String>) -> Self {
        Self::InvalidMeetingSpec(reason.into())
    }

    /// Conflict with the default "Schedule conflict." message
    pub fn conflict() -> Self {
        Self::ScheduleConflict(DEFAULT_CONFLICT_MESSAGE.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
