use sqlx::PgExecutor;
use uuid::Uuid;

use crate::domain::EmailAddress;
use crate::models::registration::{ContactInfo, NewPersonalInfo, PersonalInfo, Registration};

#[tracing::instrument(skip(executor, contact))]
pub async fn insert(
    executor: impl PgExecutor<'_>,
    event_id: Uuid,
    email: &EmailAddress,
    contact: &ContactInfo,
) -> sqlx::Result<Registration> {
    sqlx::query_as::<_, Registration>(
        "INSERT INTO registrations \
            (event_id, email, first_name, last_name, first_nickname, last_nickname) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING *",
    )
    .bind(event_id)
    .bind(email.as_ref())
    .bind(&contact.first_name)
    .bind(&contact.last_name)
    .bind(&contact.first_nickname)
    .bind(&contact.last_nickname)
    .fetch_one(executor)
    .await
}

#[tracing::instrument(skip(executor))]
pub async fn insert_personal_info(
    executor: impl PgExecutor<'_>,
    registration_id: Uuid,
    info: &NewPersonalInfo,
) -> sqlx::Result<PersonalInfo> {
    sqlx::query_as::<_, PersonalInfo>(
        "INSERT INTO personal_info (registration_id, diet, allergies) \
         VALUES ($1, $2, $3) \
         RETURNING *",
    )
    .bind(registration_id)
    .bind(&info.diet)
    .bind(&info.allergies)
    .fetch_one(executor)
    .await
}

#[tracing::instrument(skip(executor))]
pub async fn find_by_event_and_email(
    executor: impl PgExecutor<'_>,
    event_id: Uuid,
    email: &EmailAddress,
) -> sqlx::Result<Option<Registration>> {
    sqlx::query_as::<_, Registration>(
        "SELECT * FROM registrations WHERE event_id = $1 AND email = $2",
    )
    .bind(event_id)
    .bind(email.as_ref())
    .fetch_optional(executor)
    .await
}

#[tracing::instrument(skip(executor))]
pub async fn find_by_event(
    executor: impl PgExecutor<'_>,
    event_id: Uuid,
) -> sqlx::Result<Vec<Registration>> {
    sqlx::query_as::<_, Registration>(
        "SELECT * FROM registrations WHERE event_id = $1 ORDER BY created_at",
    )
    .bind(event_id)
    .fetch_all(executor)
    .await
}

#[tracing::instrument(skip(executor))]
pub async fn find_by_email(
    executor: impl PgExecutor<'_>,
    email: &EmailAddress,
) -> sqlx::Result<Vec<Registration>> {
    sqlx::query_as::<_, Registration>(
        "SELECT * FROM registrations WHERE email = $1 ORDER BY created_at",
    )
    .bind(email.as_ref())
    .fetch_all(executor)
    .await
}

#[tracing::instrument(skip(executor))]
pub async fn count_for_event(executor: impl PgExecutor<'_>, event_id: Uuid) -> sqlx::Result<i64> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(executor)
            .await?;
    Ok(count)
}

#[tracing::instrument(skip(executor))]
pub async fn delete_by_event_and_email(
    executor: impl PgExecutor<'_>,
    event_id: Uuid,
    email: &EmailAddress,
) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND email = $2")
        .bind(event_id)
        .bind(email.as_ref())
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[tracing::instrument(skip(executor))]
pub async fn find_personal_info(
    executor: impl PgExecutor<'_>,
    registration_id: Uuid,
) -> sqlx::Result<Option<PersonalInfo>> {
    sqlx::query_as::<_, PersonalInfo>(
        "SELECT * FROM personal_info WHERE registration_id = $1",
    )
    .bind(registration_id)
    .fetch_optional(executor)
    .await
}
