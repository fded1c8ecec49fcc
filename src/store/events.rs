use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::event::{Event, EventData};

#[tracing::instrument(skip(executor))]
pub async fn insert(executor: impl PgExecutor<'_>, data: &EventData) -> sqlx::Result<Event> {
    sqlx::query_as::<_, Event>(
        "INSERT INTO events \
            (title, location, date_time, published_at, \
             opens_for_registrations_at, closes_for_registrations_at) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING *",
    )
    .bind(&data.title)
    .bind(&data.location)
    .bind(data.date_time)
    .bind(data.published_at)
    .bind(data.opens_for_registrations_at)
    .bind(data.closes_for_registrations_at)
    .fetch_one(executor)
    .await
}

#[tracing::instrument(skip(executor))]
pub async fn find_all(executor: impl PgExecutor<'_>) -> sqlx::Result<Vec<Event>> {
    sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date_time")
        .fetch_all(executor)
        .await
}

#[tracing::instrument(skip(executor))]
pub async fn find_by_id(executor: impl PgExecutor<'_>, id: Uuid) -> sqlx::Result<Option<Event>> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Writes every mutable column. Nullable columns are written as given, so
/// this is also the path that clears `published_at` or
/// `closes_for_registrations_at`.
#[tracing::instrument(skip(executor))]
pub async fn update(
    executor: impl PgExecutor<'_>,
    id: Uuid,
    data: &EventData,
) -> sqlx::Result<Event> {
    sqlx::query_as::<_, Event>(
        "UPDATE events SET \
            title = $2, location = $3, date_time = $4, published_at = $5, \
            opens_for_registrations_at = $6, closes_for_registrations_at = $7 \
         WHERE id = $1 \
         RETURNING *",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.location)
    .bind(data.date_time)
    .bind(data.published_at)
    .bind(data.opens_for_registrations_at)
    .bind(data.closes_for_registrations_at)
    .fetch_one(executor)
    .await
}

/// Deletes the event; registrations go with it via the cascade.
#[tracing::instrument(skip(executor))]
pub async fn delete_by_id(executor: impl PgExecutor<'_>, id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
