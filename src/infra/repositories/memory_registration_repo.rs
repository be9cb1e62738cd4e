use std::collections::HashMap;
use crate::domain::{models::registration::TeamRegistration, ports::RegistrationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryRegistrationRepo {
    registrations: RwLock<Vec<TeamRegistration>>,
}

impl MemoryRegistrationRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationRepository for MemoryRegistrationRepo {
    async fn create(&self, registration: &TeamRegistration) -> Result<TeamRegistration, AppError> {
        self.registrations.write().await.push(registration.clone());
        Ok(registration.clone())
    }

    async fn list(&self) -> Result<Vec<TeamRegistration>, AppError> {
        Ok(self.registrations.read().await.clone())
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<TeamRegistration>, AppError> {
        Ok(self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn count_for_event(&self, event_id: &str) -> Result<usize, AppError> {
        Ok(self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| r.event_id == event_id)
            .count())
    }

    async fn count_by_event(&self) -> Result<HashMap<String, usize>, AppError> {
        let mut counts = HashMap::new();
        for registration in self.registrations.read().await.iter() {
            *counts.entry(registration.event_id.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
