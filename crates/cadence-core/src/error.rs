//! Error types for cadence-core.
//!
//! Validation problems are reported per field so a caller can point
//! the user back at the offending quiz answer. Everything downstream
//! of normalization is total over validated input, so the only other
//! engine failure is a plan with nothing bookable in it.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Top-level error for the recommendation pipeline.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed profile input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Neither the cadence walk nor a declared event yielded a
    /// bookable candidate: every recurrence date fell outside the
    /// horizon or in the past, and there are no upcoming events to
    /// pull a slot forward.
    #[error("Empty horizon: a {interval_days}-day cadence yields no bookable candidate within {horizon_days} days of the last visit")]
    EmptyHorizon {
        interval_days: i64,
        horizon_days: i64,
    },
}

/// Per-field validation failure for a raw profile.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required field is empty or missing
    #[error("Missing value for '{field}'")]
    MissingValue { field: &'static str },

    /// Value is not one of the recognized choices
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// Date field lies in the future
    #[error("Date for '{field}' ({date}) is in the future (today is {today})")]
    FutureDate {
        field: &'static str,
        date: NaiveDate,
        today: NaiveDate,
    },
}

impl ValidationError {
    /// The profile field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingValue { field } => field,
            ValidationError::InvalidValue { field, .. } => field,
            ValidationError::FutureDate { field, .. } => field,
        }
    }
}

/// Errors from the in-memory appointment book.
#[derive(Error, Debug)]
pub enum BookingError {
    /// No appointment with the given id
    #[error("No appointment with id {0}")]
    UnknownAppointment(Uuid),

    /// Appointment was already confirmed
    #[error("Appointment {0} is already confirmed")]
    AlreadyConfirmed(Uuid),
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
