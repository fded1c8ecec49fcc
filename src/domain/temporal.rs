//! Ordering predicates over an event's instants.
//!
//! Each predicate compares explicit timestamps and nothing else. A `None`
//! closing instant means the event never closes for registrations, so any
//! predicate constraining it holds trivially.

use chrono::{DateTime, Utc};

/// An event must be published no later than it opens for registrations.
pub fn published_before_opening(published_at: DateTime<Utc>, opens_at: DateTime<Utc>) -> bool {
    published_at <= opens_at
}

/// An event must be published strictly before it closes for registrations.
pub fn published_before_closing(
    published_at: DateTime<Utc>,
    closes_at: Option<DateTime<Utc>>,
) -> bool {
    closes_at.map_or(true, |closes_at| published_at < closes_at)
}

/// An event must be published no later than it starts.
pub fn published_before_starting(published_at: DateTime<Utc>, date_time: DateTime<Utc>) -> bool {
    published_at <= date_time
}

/// The registration window must be non-degenerate: it opens strictly
/// before it closes.
pub fn opening_before_closing(opens_at: DateTime<Utc>, closes_at: Option<DateTime<Utc>>) -> bool {
    closes_at.map_or(true, |closes_at| opens_at < closes_at)
}

/// Registrations must open no later than the event starts.
pub fn opening_before_starting(opens_at: DateTime<Utc>, date_time: DateTime<Utc>) -> bool {
    opens_at <= date_time
}

/// Registrations must close no later than the event starts.
pub fn closing_before_starting(
    closes_at: Option<DateTime<Utc>>,
    date_time: DateTime<Utc>,
) -> bool {
    closes_at.map_or(true, |closes_at| closes_at <= date_time)
}
