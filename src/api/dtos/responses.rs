use crate::domain::models::event::EventView;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct CurrentEventResponse {
    pub current_event: Option<EventView>,
}
