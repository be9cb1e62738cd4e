use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminSession;
use crate::api::dtos::{
    requests::{AdminEventQuery, CreateEventRequest, EventQuery, UpdateEventRequest},
    responses::{CurrentEventResponse, StatusResponse},
};
use crate::domain::models::event::{Event, EventView};
use crate::domain::services::views;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

async fn project(state: &AppState, events: Vec<Event>) -> Result<Vec<EventView>, AppError> {
    let counts = state.registration_store.counts().await?;
    Ok(EventView::project(events, &counts))
}

async fn project_one(state: &AppState, event: Event) -> Result<EventView, AppError> {
    let registered_teams = state.registration_store.count_for_event(&event.id).await?;
    Ok(EventView { event, registered_teams })
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_store.events().await?;
    let filtered = views::search(&events, params.search.as_deref(), params.category.as_deref());
    Ok(Json(project(&state, filtered).await?))
}

pub async fn list_featured(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let featured = state.event_store.featured_events().await;
    Ok(Json(project(&state, featured).await?))
}

pub async fn list_upcoming(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let upcoming = state.event_store.upcoming_events().await;
    Ok(Json(project(&state, upcoming).await?))
}

pub async fn list_past(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_store.events().await?;
    let past = views::past(&events, Utc::now().date_naive());
    Ok(Json(project(&state, past).await?))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_store.events().await?;
    Ok(Json(views::categories(&events)))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_store.find_event(&id).await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))?;

    Ok(Json(project_one(&state, event).await?))
}

pub async fn get_current_event(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let current_event = match state.event_store.current_event().await {
        Some(event) => Some(project_one(&state, event).await?),
        None => None,
    };
    Ok(Json(CurrentEventResponse { current_event }))
}

pub async fn set_current_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let current_event = match state.event_store.set_current_event(&id).await? {
        Some(event) => Some(project_one(&state, event).await?),
        None => None,
    };
    Ok(Json(CurrentEventResponse { current_event }))
}

pub async fn clear_current_event(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    state.event_store.clear_current_event().await;
    Ok(Json(StatusResponse { status: "cleared" }))
}

pub async fn list_admin_events(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Query(params): Query<AdminEventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_store.events().await?;
    let mut filtered = views::search(&events, params.search.as_deref(), params.category.as_deref());
    views::sort_by(&mut filtered, params.sort, params.direction);
    Ok(Json(project(&state, filtered).await?))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AdminSession(admin): AdminSession,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating event '{}' as {}", payload.title, admin.email);

    let created = state.event_store.add_event(payload.into()).await?;
    Ok(Json(project_one(&state, created).await?))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.event_store.update_event(&id, payload.into()).await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))?;

    Ok(Json(project_one(&state, updated).await?))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.event_store.delete_event(&id).await? {
        return Err(AppError::NotFound(format!("Event '{}' not found", id)));
    }
    Ok(Json(StatusResponse { status: "deleted" }))
}
