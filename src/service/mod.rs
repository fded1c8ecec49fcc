//! Transactional operations over the event and registration records.
//!
//! Every read-check-write sequence runs inside a single transaction on the
//! pool passed in by the caller; dropping the transaction on an early
//! error rolls everything back, so no partial mutation is ever visible.

pub mod events;
pub mod registrations;

use uuid::Uuid;

use crate::utils::error::AppError;

pub(crate) fn event_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Event with id '{id}' was not found"))
}
