use std::sync::Arc;
use crate::config::Config;
use crate::domain::services::{
    auth_store::AuthStore, event_store::EventStore, registration_store::RegistrationStore,
};

/// The three stores are independent; handlers are the only place they meet.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_store: Arc<EventStore>,
    pub registration_store: Arc<RegistrationStore>,
    pub auth_store: Arc<AuthStore>,
}
