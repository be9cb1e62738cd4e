use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AdminSession;
use crate::api::dtos::requests::RegisterTeamRequest;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn register_team(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<RegisterTeamRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_store.find_event(&event_id).await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", event_id)))?;

    info!("register_team: '{}' for event {}", payload.team_name, event.id);

    let registration = state.registration_store.register_team(payload.for_event(event.id)).await?;
    Ok(Json(registration))
}

pub async fn list_event_registrations(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let registrations = state.registration_store.get_event_registrations(&event_id).await?;
    Ok(Json(registrations))
}

pub async fn list_all_registrations(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let registrations = state.registration_store.team_registrations().await?;
    Ok(Json(registrations))
}
