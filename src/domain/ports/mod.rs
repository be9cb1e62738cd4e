use crate::domain::models::{event::Event, registration::TeamRegistration};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    /// Canonical order: insertion order.
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    /// `None` when no event has `event.id`.
    async fn update(&self, event: &Event) -> Result<Option<Event>, AppError>;
    /// `false` when no event has `id`.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create(&self, registration: &TeamRegistration) -> Result<TeamRegistration, AppError>;
    async fn list(&self) -> Result<Vec<TeamRegistration>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<TeamRegistration>, AppError>;
    async fn count_for_event(&self, event_id: &str) -> Result<usize, AppError>;
    async fn count_by_event(&self) -> Result<HashMap<String, usize>, AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), AppError>;
}
