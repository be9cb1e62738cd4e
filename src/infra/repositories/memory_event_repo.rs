use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryEventRepo {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventRepo {
    pub fn new(seed: Vec<Event>) -> Self {
        Self { events: RwLock::new(seed) }
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        self.events.write().await.push(event.clone());
        Ok(event.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        Ok(self.events.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.read().await.clone())
    }

    async fn update(&self, event: &Event) -> Result<Option<Event>, AppError> {
        let mut events = self.events.write().await;
        Ok(events.iter_mut().find(|e| e.id == event.id).map(|slot| {
            *slot = event.clone();
            slot.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() != before)
    }
}
