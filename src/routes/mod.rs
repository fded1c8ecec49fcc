use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{events, health_check, registrations};

pub fn create_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/:id",
            get(events::get_event).patch(events::edit_event),
        )
        .route("/events/:id/publish", post(events::publish_event))
        .route("/events/:id/unpublish", post(events::unpublish_event))
        .route(
            "/events/:id/registrations",
            get(registrations::list_registrations).post(registrations::register_attendee),
        )
        .route(
            "/events/:id/registrations/open",
            post(events::open_registrations),
        )
        .route(
            "/events/:id/registrations/close",
            post(events::close_registrations),
        )
        .route(
            "/events/:id/registrations/:email",
            delete(registrations::unregister),
        )
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(pool)
}
