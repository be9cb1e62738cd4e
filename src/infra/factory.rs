use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::models::{auth::AdminCredentials, event::Event};
use crate::domain::ports::EmailService;
use crate::domain::services::{
    auth_store::AuthStore, event_store::EventStore, registration_store::RegistrationStore,
};
use crate::infra::email::log_email_service::LogEmailService;
use crate::infra::repositories::{
    memory_event_repo::MemoryEventRepo, memory_registration_repo::MemoryRegistrationRepo,
};
use crate::infra::seed::seed_events;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let seed = if config.seed_events {
        info!("Seeding launch events...");
        seed_events()
    } else {
        Vec::new()
    };

    build_state(config, seed, Arc::new(LogEmailService)).await
}

/// Fresh stores for every call; nothing is shared between two states.
pub async fn build_state(config: &Config, seed: Vec<Event>, email_service: Arc<dyn EmailService>) -> AppState {
    let event_store = EventStore::load(Arc::new(MemoryEventRepo::new(seed)))
        .await
        .expect("Failed to load event store");

    let registration_store = RegistrationStore::new(Arc::new(MemoryRegistrationRepo::new()));

    let credentials = AdminCredentials {
        email: config.admin_email.clone(),
        password: config.admin_password.clone(),
        name: config.admin_name.clone(),
    };
    let auth_store = AuthStore::new(credentials, config.login_delay(), email_service);

    AppState {
        config: config.clone(),
        event_store: Arc::new(event_store),
        registration_store: Arc::new(registration_store),
        auth_store: Arc::new(auth_store),
    }
}
