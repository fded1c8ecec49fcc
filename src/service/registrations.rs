use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{lifecycle, EmailAddress};
use crate::models::registration::{ContactInfo, NewPersonalInfo, Registration};
use crate::service::event_not_found;
use crate::store;
use crate::utils::error::AppError;

/// Postgres error code for a unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Registers an attendee to an event, as one atomic unit: the eligibility
/// gate, the duplicate check, and the insert all happen in the same
/// transaction. Two concurrent calls for the same `(event, email)` pair
/// cannot both succeed; the loser of the race hits the unique index and is
/// reported as a duplicate.
pub async fn register_attendee(
    pool: &PgPool,
    event_id: Uuid,
    contact: ContactInfo,
    personal_info: Option<NewPersonalInfo>,
    now: DateTime<Utc>,
) -> Result<Registration, AppError> {
    let email = EmailAddress::parse(&contact.email).map_err(AppError::Validation)?;

    let mut tx = pool.begin().await?;
    let event = store::events::find_by_id(&mut *tx, event_id)
        .await?
        .ok_or_else(|| event_not_found(event_id))?;

    if !lifecycle::can_register(&event.schedule(), now) {
        return Err(AppError::RegistrationClosed(format!(
            "Event '{}' is not open for registrations",
            event.title
        )));
    }

    if store::registrations::find_by_event_and_email(&mut *tx, event_id, &email)
        .await?
        .is_some()
    {
        return Err(duplicate_registration(&email, &event.title));
    }

    let registration = store::registrations::insert(&mut *tx, event_id, &email, &contact)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                duplicate_registration(&email, &event.title)
            } else {
                AppError::Database(err)
            }
        })?;

    if let Some(info) = &personal_info {
        store::registrations::insert_personal_info(&mut *tx, registration.id, info).await?;
    }

    tx.commit().await?;
    tracing::info!(event_id = %event_id, email = %email, "Attendee registered");
    Ok(registration)
}

/// Removes the registration for `(event_id, email)`. The event itself is
/// untouched.
pub async fn unregister(pool: &PgPool, event_id: Uuid, email: &str) -> Result<(), AppError> {
    let email = EmailAddress::parse(email).map_err(AppError::Validation)?;
    let deleted = store::registrations::delete_by_event_and_email(pool, event_id, &email).await?;
    if !deleted {
        return Err(AppError::NotFound(format!(
            "No registration for '{email}' to event '{event_id}' was found"
        )));
    }
    tracing::info!(event_id = %event_id, email = %email, "Attendee unregistered");
    Ok(())
}

pub async fn list_registrations_for_event(
    pool: &PgPool,
    event_id: Uuid,
) -> Result<Vec<Registration>, AppError> {
    let mut tx = pool.begin().await?;
    store::events::find_by_id(&mut *tx, event_id)
        .await?
        .ok_or_else(|| event_not_found(event_id))?;
    let registrations = store::registrations::find_by_event(&mut *tx, event_id).await?;
    tx.commit().await?;
    Ok(registrations)
}

fn duplicate_registration(email: &EmailAddress, event_title: &str) -> AppError {
    AppError::DuplicateRegistration(format!(
        "'{email}' is already registered to event '{event_title}'"
    ))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
