use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::registration::{ContactInfo, NewPersonalInfo};
use crate::service;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub contact_info: ContactInfo,
    pub personal_info: Option<NewPersonalInfo>,
}

pub async fn register_attendee(
    State(pool): State<PgPool>,
    Path(event_id): Path<Uuid>,
    Json(body): Json<RegisterBody>,
) -> Result<Response, AppError> {
    let registration = service::registrations::register_attendee(
        &pool,
        event_id,
        body.contact_info,
        body.personal_info,
        Utc::now(),
    )
    .await?;
    Ok(created(registration, "Registration created").into_response())
}

pub async fn list_registrations(
    State(pool): State<PgPool>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let registrations =
        service::registrations::list_registrations_for_event(&pool, event_id).await?;
    Ok(success(registrations, "Registrations fetched").into_response())
}

pub async fn unregister(
    State(pool): State<PgPool>,
    Path((event_id, email)): Path<(Uuid, String)>,
) -> Result<Response, AppError> {
    service::registrations::unregister(&pool, event_id, &email).await?;
    Ok(empty_success("Registration removed").into_response())
}
