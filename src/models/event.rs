use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::EventSchedule;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub opens_for_registrations_at: DateTime<Utc>,
    pub closes_for_registrations_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn schedule(&self) -> EventSchedule {
        EventSchedule {
            date_time: self.date_time,
            published_at: self.published_at,
            opens_for_registrations_at: self.opens_for_registrations_at,
            closes_for_registrations_at: self.closes_for_registrations_at,
        }
    }
}

/// Input for creating an event. Unset optional instants are filled in by
/// `domain::validation::default_event_data` before the row is written.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub opens_for_registrations_at: Option<DateTime<Utc>>,
    pub closes_for_registrations_at: Option<DateTime<Utc>>,
}

/// The full set of writable event columns, after defaulting.
#[derive(Debug, Clone)]
pub struct EventData {
    pub title: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub opens_for_registrations_at: DateTime<Utc>,
    pub closes_for_registrations_at: Option<DateTime<Utc>>,
}

impl EventData {
    pub fn schedule(&self) -> EventSchedule {
        EventSchedule {
            date_time: self.date_time,
            published_at: self.published_at,
            opens_for_registrations_at: self.opens_for_registrations_at,
            closes_for_registrations_at: self.closes_for_registrations_at,
        }
    }
}

impl From<Event> for EventData {
    fn from(event: Event) -> Self {
        Self {
            title: event.title,
            location: event.location,
            date_time: event.date_time,
            published_at: event.published_at,
            opens_for_registrations_at: event.opens_for_registrations_at,
            closes_for_registrations_at: event.closes_for_registrations_at,
        }
    }
}

/// Partial update for an event. `None` leaves the column unchanged; the
/// nullable columns can only be cleared through the dedicated operations
/// (`unpublish`, `open_registrations`), never through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub opens_for_registrations_at: Option<DateTime<Utc>>,
    pub closes_for_registrations_at: Option<DateTime<Utc>>,
}

impl EventPatch {
    /// Merges the patch onto the current column values.
    pub fn apply_to(self, current: EventData) -> EventData {
        EventData {
            title: self.title.unwrap_or(current.title),
            location: self.location.unwrap_or(current.location),
            date_time: self.date_time.unwrap_or(current.date_time),
            published_at: self.published_at.or(current.published_at),
            opens_for_registrations_at: self
                .opens_for_registrations_at
                .unwrap_or(current.opens_for_registrations_at),
            closes_for_registrations_at: self
                .closes_for_registrations_at
                .or(current.closes_for_registrations_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    fn current() -> EventData {
        EventData {
            title: "Board game night".to_string(),
            location: "The basement".to_string(),
            date_time: instant(20),
            published_at: Some(instant(1)),
            opens_for_registrations_at: instant(2),
            closes_for_registrations_at: None,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let merged = EventPatch::default().apply_to(current());
        assert_eq!(merged.title, "Board game night");
        assert_eq!(merged.date_time, instant(20));
        assert_eq!(merged.published_at, Some(instant(1)));
        assert_eq!(merged.closes_for_registrations_at, None);
    }

    #[test]
    fn patch_overrides_only_supplied_fields() {
        let patch = EventPatch {
            title: Some("Game night".to_string()),
            closes_for_registrations_at: Some(instant(15)),
            ..Default::default()
        };
        let merged = patch.apply_to(current());
        assert_eq!(merged.title, "Game night");
        assert_eq!(merged.location, "The basement");
        assert_eq!(merged.closes_for_registrations_at, Some(instant(15)));
    }

    #[test]
    fn patch_cannot_clear_nullable_fields() {
        let patch = EventPatch {
            published_at: None,
            ..Default::default()
        };
        let merged = patch.apply_to(current());
        assert_eq!(merged.published_at, Some(instant(1)));
    }
}
