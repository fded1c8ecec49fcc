//! The event lifecycle and registration-eligibility core.
//!
//! Everything in here is pure and deterministic: current time never enters
//! implicitly, it is always passed in as an explicit instant by the caller.
//! The service layer is the only place that reads the clock.

pub mod email;
pub mod lifecycle;
pub mod temporal;
pub mod validation;

pub use email::EmailAddress;
pub use validation::{assert_event_valid, default_event_data, is_event_valid, InvalidEvent};

use chrono::{DateTime, Utc};

/// The four instants that govern an event's lifecycle, detached from the
/// rest of the row so the core can be exercised without a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    pub date_time: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub opens_for_registrations_at: DateTime<Utc>,
    pub closes_for_registrations_at: Option<DateTime<Utc>>,
}
