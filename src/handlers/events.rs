use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::lifecycle;
use crate::models::event::{Event, EventPatch, NewEvent};
use crate::service;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

/// An event row together with its status at the time of the request.
#[derive(Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub is_draft: bool,
    pub has_opened: bool,
    pub has_closed: bool,
    pub is_open_for_registration: bool,
}

impl EventView {
    pub fn at(event: Event, now: DateTime<Utc>) -> Self {
        let schedule = event.schedule();
        Self {
            is_draft: lifecycle::is_draft(&schedule),
            has_opened: lifecycle::has_opened(&schedule, now),
            has_closed: lifecycle::has_closed(&schedule, now),
            is_open_for_registration: lifecycle::is_open_for_registration(&schedule, now),
            event,
        }
    }
}

pub async fn list_events(State(pool): State<PgPool>) -> Result<Response, AppError> {
    let now = Utc::now();
    let events: Vec<EventView> = service::events::list_events(&pool)
        .await?
        .into_iter()
        .map(|event| EventView::at(event, now))
        .collect();
    Ok(success(events, "Events fetched").into_response())
}

pub async fn create_event(
    State(pool): State<PgPool>,
    Json(new): Json<NewEvent>,
) -> Result<Response, AppError> {
    let event = service::events::create_event(&pool, new, Utc::now()).await?;
    Ok(created(event, "Event created").into_response())
}

pub async fn get_event(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = service::events::get_event(&pool, id).await?;
    Ok(success(EventView::at(event, Utc::now()), "Event fetched").into_response())
}

pub async fn edit_event(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(patch): Json<EventPatch>,
) -> Result<Response, AppError> {
    let event = service::events::edit_event(&pool, id, patch).await?;
    Ok(success(event, "Event updated").into_response())
}

#[derive(Debug, Deserialize)]
pub struct PublishBody {
    pub published_at: Option<DateTime<Utc>>,
}

pub async fn publish_event(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    body: Option<Json<PublishBody>>,
) -> Result<Response, AppError> {
    let at = body
        .and_then(|Json(body)| body.published_at)
        .unwrap_or_else(Utc::now);
    let event = service::events::publish_event(&pool, id, at).await?;
    Ok(success(event, "Event published").into_response())
}

pub async fn unpublish_event(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = service::events::unpublish_event(&pool, id).await?;
    Ok(success(event, "Event unpublished").into_response())
}

pub async fn open_registrations(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = service::events::open_registrations(&pool, id, Utc::now()).await?;
    Ok(success(event, "Registrations opened").into_response())
}

pub async fn close_registrations(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = service::events::close_registrations(&pool, id, Utc::now()).await?;
    Ok(success(event, "Registrations closed").into_response())
}
