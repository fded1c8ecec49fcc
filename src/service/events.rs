use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{assert_event_valid, default_event_data, lifecycle};
use crate::models::event::{Event, EventData, EventPatch, NewEvent};
use crate::service::event_not_found;
use crate::store;
use crate::utils::error::AppError;

/// Validates and creates an event. Optional instants the caller left
/// unset are defaulted against the supplied `now`.
pub async fn create_event(
    pool: &PgPool,
    new: NewEvent,
    now: DateTime<Utc>,
) -> Result<Event, AppError> {
    let data = default_event_data(new, now);
    assert_event_valid(&data.schedule())?;
    let event = store::events::insert(pool, &data).await?;
    tracing::info!(event_id = %event.id, title = %event.title, "Event created");
    Ok(event)
}

pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, AppError> {
    Ok(store::events::find_all(pool).await?)
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Event, AppError> {
    store::events::find_by_id(pool, id)
        .await?
        .ok_or_else(|| event_not_found(id))
}

/// Applies a partial edit. The merged result is revalidated before the
/// write; an edit that would leave the event invalid is rejected in full.
pub async fn edit_event(pool: &PgPool, id: Uuid, patch: EventPatch) -> Result<Event, AppError> {
    let mut tx = pool.begin().await?;
    let event = store::events::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    let data = patch.apply_to(EventData::from(event));
    assert_event_valid(&data.schedule())?;
    let updated = store::events::update(&mut *tx, id, &data).await?;
    tx.commit().await?;
    Ok(updated)
}

/// Announces the event at the given instant.
pub async fn publish_event(
    pool: &PgPool,
    id: Uuid,
    at: DateTime<Utc>,
) -> Result<Event, AppError> {
    let mut tx = pool.begin().await?;
    let event = store::events::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    let mut data = EventData::from(event);
    data.published_at = Some(at);
    assert_event_valid(&data.schedule())?;
    let updated = store::events::update(&mut *tx, id, &data).await?;
    tx.commit().await?;
    tracing::info!(event_id = %id, published_at = %at, "Event published");
    Ok(updated)
}

/// Takes the event back to a draft.
pub async fn unpublish_event(pool: &PgPool, id: Uuid) -> Result<Event, AppError> {
    let mut tx = pool.begin().await?;
    let event = store::events::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    let mut data = EventData::from(event);
    data.published_at = None;
    assert_event_valid(&data.schedule())?;
    let updated = store::events::update(&mut *tx, id, &data).await?;
    tx.commit().await?;
    tracing::info!(event_id = %id, "Event unpublished");
    Ok(updated)
}

/// Opens registrations at `now` and clears any closing instant, so the
/// window stays open indefinitely until closed again.
pub async fn open_registrations(
    pool: &PgPool,
    id: Uuid,
    now: DateTime<Utc>,
) -> Result<Event, AppError> {
    let mut tx = pool.begin().await?;
    let event = store::events::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    let mut data = EventData::from(event);
    data.opens_for_registrations_at = now;
    data.closes_for_registrations_at = None;
    assert_event_valid(&data.schedule())?;
    let updated = store::events::update(&mut *tx, id, &data).await?;
    tx.commit().await?;
    tracing::info!(event_id = %id, "Registrations opened");
    Ok(updated)
}

/// Closes registrations effective at `now`, leaving the opening instant
/// untouched. Idempotent: an event that is not open for registration at
/// `now` is returned unchanged.
pub async fn close_registrations(
    pool: &PgPool,
    id: Uuid,
    now: DateTime<Utc>,
) -> Result<Event, AppError> {
    let mut tx = pool.begin().await?;
    let event = store::events::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| event_not_found(id))?;
    if !lifecycle::can_register(&event.schedule(), now) {
        tx.commit().await?;
        return Ok(event);
    }
    let mut data = EventData::from(event);
    data.closes_for_registrations_at = Some(now);
    assert_event_valid(&data.schedule())?;
    let updated = store::events::update(&mut *tx, id, &data).await?;
    tx.commit().await?;
    tracing::info!(event_id = %id, closes_at = %now, "Registrations closed");
    Ok(updated)
}
