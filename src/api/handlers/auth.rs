use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{LoginRequest, PasswordResetRequest};
use crate::api::dtos::responses::StatusResponse;
use crate::api::extractors::auth::SESSION_COOKIE;
use crate::domain::models::auth::AuthResponse;
use std::sync::Arc;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use time::Duration;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = state.auth_store.login(&payload.email, &payload.password).await?;

    let mut session_c = Cookie::new(SESSION_COOKIE, token);
    session_c.set_http_only(true);
    session_c.set_secure(state.config.secure_cookies);
    session_c.set_same_site(SameSite::Strict);
    session_c.set_path("/");
    session_c.set_max_age(Duration::hours(8));
    cookies.add(session_c);

    Ok(Json(AuthResponse { user }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    state.auth_store.logout().await;
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    Ok(Json(StatusResponse { status: "logged_out" }))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.auth_store.snapshot().await))
}

pub async fn request_password_reset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PasswordResetRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.auth_store.request_password_reset(&payload.email).await?;
    Ok(Json(StatusResponse { status: "reset_email_sent" }))
}
