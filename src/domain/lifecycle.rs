//! Lifecycle queries deriving an event's status from an explicit `now`.

use chrono::{DateTime, Utc};

use crate::domain::EventSchedule;

/// A draft has not been announced at all: no publication instant is set.
pub fn is_draft(schedule: &EventSchedule) -> bool {
    schedule.published_at.is_none()
}

/// Whether the publication instant has passed at `now`. An unset instant
/// imposes no constraint, so a draft counts as published here; a future
/// instant has not been reached yet.
pub fn has_been_published(schedule: &EventSchedule, now: DateTime<Utc>) -> bool {
    schedule
        .published_at
        .map_or(true, |published_at| now >= published_at)
}

pub fn has_opened(schedule: &EventSchedule, now: DateTime<Utc>) -> bool {
    now >= schedule.opens_for_registrations_at
}

pub fn has_closed(schedule: &EventSchedule, now: DateTime<Utc>) -> bool {
    schedule
        .closes_for_registrations_at
        .map_or(false, |closes_at| now >= closes_at)
}

/// The registration window is the half-open interval
/// `[opens_for_registrations_at, closes_for_registrations_at)`, and a set
/// publication instant must additionally have passed.
pub fn is_open_for_registration(schedule: &EventSchedule, now: DateTime<Utc>) -> bool {
    has_been_published(schedule, now) && has_opened(schedule, now) && !has_closed(schedule, now)
}

/// The eligibility gate: a registration write may only proceed while this
/// holds. Evaluated inside the registration transaction, right before the
/// write.
pub fn can_register(schedule: &EventSchedule, now: DateTime<Utc>) -> bool {
    is_open_for_registration(schedule, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, n, 12, 0, 0).unwrap()
    }

    /// Published day 1, opens day 2, closes day 8, starts day 8.
    fn schedule() -> EventSchedule {
        EventSchedule {
            date_time: day(8),
            published_at: Some(day(1)),
            opens_for_registrations_at: day(2),
            closes_for_registrations_at: Some(day(8)),
        }
    }

    #[test]
    fn open_between_opening_and_closing() {
        assert!(is_open_for_registration(&schedule(), day(5)));
    }

    #[test]
    fn closed_before_opening() {
        assert!(!is_open_for_registration(&schedule(), day(1)));
    }

    #[test]
    fn closed_after_closing() {
        assert!(!is_open_for_registration(&schedule(), day(9)));
    }

    #[test]
    fn the_closing_instant_itself_is_closed() {
        assert!(has_closed(&schedule(), day(8)));
        assert!(!is_open_for_registration(&schedule(), day(8)));
    }

    #[test]
    fn the_opening_instant_itself_is_open() {
        assert!(has_opened(&schedule(), day(2)));
        assert!(is_open_for_registration(&schedule(), day(2)));
    }

    #[test]
    fn never_closing_stays_open() {
        let schedule = EventSchedule {
            closes_for_registrations_at: None,
            ..schedule()
        };
        assert!(!has_closed(&schedule, day(30)));
        assert!(is_open_for_registration(&schedule, day(30)));
    }

    #[test]
    fn an_unset_publication_instant_imposes_no_constraint() {
        let schedule = EventSchedule {
            published_at: None,
            ..schedule()
        };
        assert!(is_draft(&schedule));
        assert!(has_been_published(&schedule, day(5)));
        // The window alone decides.
        assert!(is_open_for_registration(&schedule, day(5)));
        assert!(!is_open_for_registration(&schedule, day(1)));
    }

    #[test]
    fn a_future_publication_instant_is_not_yet_published() {
        let schedule = EventSchedule {
            published_at: Some(day(6)),
            opens_for_registrations_at: day(2),
            ..schedule()
        };
        assert!(!is_draft(&schedule));
        assert!(!has_been_published(&schedule, day(5)));
        assert!(has_been_published(&schedule, day(6)));
    }

    #[test]
    fn can_register_mirrors_the_window() {
        assert!(can_register(&schedule(), day(5)));
        assert!(!can_register(&schedule(), day(9)));
    }
}
