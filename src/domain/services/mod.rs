pub mod auth_store;
pub mod dates;
pub mod event_store;
pub mod registration_store;
pub mod views;
