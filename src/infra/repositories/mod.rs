pub mod memory_event_repo;
pub mod memory_registration_repo;
