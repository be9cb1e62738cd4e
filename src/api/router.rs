use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, event, health, registration};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::get_session))
        .route("/api/v1/auth/password-reset", post(auth::request_password_reset))

        // Public Events
        .route("/api/v1/events", get(event::list_events))
        .route("/api/v1/events/featured", get(event::list_featured))
        .route("/api/v1/events/upcoming", get(event::list_upcoming))
        .route("/api/v1/events/past", get(event::list_past))
        .route("/api/v1/events/categories", get(event::list_categories))
        .route("/api/v1/events/{id}", get(event::get_event))
        .route("/api/v1/events/{id}/registrations", post(registration::register_team))

        // Current Event
        .route("/api/v1/current-event", get(event::get_current_event).delete(event::clear_current_event))
        .route("/api/v1/current-event/{id}", put(event::set_current_event))

        // Admin
        .route("/api/v1/admin/events", get(event::list_admin_events).post(event::create_event))
        .route("/api/v1/admin/events/{id}", put(event::update_event).delete(event::delete_event))
        .route("/api/v1/admin/events/{id}/registrations", get(registration::list_event_registrations))
        .route("/api/v1/admin/registrations", get(registration::list_all_registrations))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
