//! The validity contract for an event's schedule.
//!
//! The predicates run in a fixed order and validation stops at the first
//! failure, so callers always see the same message for the same invalid
//! schedule. Draft events (no `published_at`) are exempt from the
//! published-relative rules.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{temporal, EventSchedule};
use crate::models::event::{EventData, NewEvent};

/// A schedule that violates one of the ordering rules. Carries the
/// offending column so the caller can point at the right input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct InvalidEvent {
    pub field: &'static str,
    pub message: &'static str,
}

impl InvalidEvent {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Checks the schedule against every ordering rule, in a fixed order,
/// returning the first violation.
pub fn assert_event_valid(schedule: &EventSchedule) -> Result<(), InvalidEvent> {
    if let Some(published_at) = schedule.published_at {
        if !temporal::published_before_opening(published_at, schedule.opens_for_registrations_at) {
            return Err(InvalidEvent::new(
                "opens_for_registrations_at",
                "event cannot open for registrations before being published",
            ));
        }
        if !temporal::published_before_closing(published_at, schedule.closes_for_registrations_at) {
            return Err(InvalidEvent::new(
                "closes_for_registrations_at",
                "event cannot close for registrations before being published",
            ));
        }
        if !temporal::published_before_starting(published_at, schedule.date_time) {
            return Err(InvalidEvent::new(
                "date_time",
                "event cannot start before being published",
            ));
        }
    }
    if !temporal::opening_before_closing(
        schedule.opens_for_registrations_at,
        schedule.closes_for_registrations_at,
    ) {
        return Err(InvalidEvent::new(
            "closes_for_registrations_at",
            "event cannot close for registrations before opening",
        ));
    }
    if !temporal::opening_before_starting(schedule.opens_for_registrations_at, schedule.date_time) {
        return Err(InvalidEvent::new(
            "opens_for_registrations_at",
            "event cannot open for registrations after it starts",
        ));
    }
    if !temporal::closing_before_starting(schedule.closes_for_registrations_at, schedule.date_time)
    {
        return Err(InvalidEvent::new(
            "closes_for_registrations_at",
            "event cannot close for registrations after it starts",
        ));
    }
    Ok(())
}

pub fn is_event_valid(schedule: &EventSchedule) -> bool {
    assert_event_valid(schedule).is_ok()
}

/// The single construction path for event data: fills the optional
/// instants a caller left unset. `published_at` and
/// `opens_for_registrations_at` default to the supplied `now`;
/// `closes_for_registrations_at` stays unset unless given.
pub fn default_event_data(new: NewEvent, now: DateTime<Utc>) -> EventData {
    EventData {
        title: new.title,
        location: new.location,
        date_time: new.date_time,
        published_at: Some(new.published_at.unwrap_or(now)),
        opens_for_registrations_at: new.opens_for_registrations_at.unwrap_or(now),
        closes_for_registrations_at: new.closes_for_registrations_at,
    }
}
