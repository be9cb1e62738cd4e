use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use crate::domain::{
    models::registration::{NewTeamRegistration, TeamRegistration},
    ports::RegistrationRepository,
};
use crate::error::AppError;
use validator::Validate;

/// Append-only log of team registrations.
///
/// Per-event counts are derived from the log on every read rather than kept
/// on the event, so they cannot drift.
pub struct RegistrationStore {
    repo: Arc<dyn RegistrationRepository>,
}

impl RegistrationStore {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    pub async fn register_team(&self, params: NewTeamRegistration) -> Result<TeamRegistration, AppError> {
        params.validate()?;

        let registration = TeamRegistration::new(params);
        let saved = self.repo.create(&registration).await?;

        info!(
            event_id = %saved.event_id,
            members = saved.members.len(),
            "Team registered: {}", saved.team_name
        );
        Ok(saved)
    }

    /// Insertion order; empty when the event has no registrations.
    pub async fn get_event_registrations(&self, event_id: &str) -> Result<Vec<TeamRegistration>, AppError> {
        self.repo.list_by_event(event_id).await
    }

    pub async fn team_registrations(&self) -> Result<Vec<TeamRegistration>, AppError> {
        self.repo.list().await
    }

    pub async fn count_for_event(&self, event_id: &str) -> Result<usize, AppError> {
        self.repo.count_for_event(event_id).await
    }

    pub async fn counts(&self) -> Result<HashMap<String, usize>, AppError> {
        self.repo.count_by_event().await
    }
}
