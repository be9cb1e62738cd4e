use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::domain::{
    models::event::{Event, EventPatch, NewEventParams},
    ports::EventRepository,
    services::views,
};
use crate::error::AppError;

#[derive(Debug, Default, Clone)]
struct DerivedViews {
    featured: Vec<Event>,
    upcoming: Vec<Event>,
    current: Option<Event>,
}

impl DerivedViews {
    /// Recomputes every view from `events` in one pass. The current event is
    /// re-read by id, so an update replaces it and a delete clears it.
    fn recompute(&mut self, events: &[Event]) {
        self.featured = views::featured(events);
        self.upcoming = views::upcoming(events);
        self.current = self
            .current
            .take()
            .and_then(|current| events.iter().find(|e| e.id == current.id).cloned());
    }
}

/// A consistent read of the canonical list together with its derived views.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    pub events: Vec<Event>,
    pub featured: Vec<Event>,
    pub upcoming: Vec<Event>,
    pub current: Option<Event>,
}

/// Canonical event list plus the featured, upcoming and current views.
///
/// Every mutation holds the view lock across the repository write and the
/// recomputation, so readers never observe a view older than the list.
pub struct EventStore {
    repo: Arc<dyn EventRepository>,
    views: RwLock<DerivedViews>,
}

impl EventStore {
    pub async fn load(repo: Arc<dyn EventRepository>) -> Result<Self, AppError> {
        let events = repo.list().await?;
        let mut views = DerivedViews::default();
        views.recompute(&events);
        info!("Event store loaded with {} events", events.len());

        Ok(Self { repo, views: RwLock::new(views) })
    }

    pub async fn add_event(&self, params: NewEventParams) -> Result<Event, AppError> {
        let event = Event::new(params)?;

        let mut views = self.views.write().await;
        let created = self.repo.create(&event).await?;
        views.recompute(&self.repo.list().await?);

        info!("Event added: {} ({})", created.title, created.id);
        Ok(created)
    }

    /// Returns `Ok(None)` and leaves all state untouched when `id` is unknown.
    pub async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Option<Event>, AppError> {
        let mut views = self.views.write().await;

        let Some(existing) = self.repo.find_by_id(id).await? else {
            debug!("update_event: no event with id {}", id);
            return Ok(None);
        };

        let merged = existing.merged(patch)?;
        let updated = self.repo.update(&merged).await?;
        views.recompute(&self.repo.list().await?);

        if updated.is_some() {
            info!("Event updated: {}", id);
        }
        Ok(updated)
    }

    /// Returns whether an event was removed.
    pub async fn delete_event(&self, id: &str) -> Result<bool, AppError> {
        let mut views = self.views.write().await;

        let removed = self.repo.delete(id).await?;
        if removed {
            views.recompute(&self.repo.list().await?);
            info!("Event deleted: {}", id);
        } else {
            debug!("delete_event: no event with id {}", id);
        }
        Ok(removed)
    }

    /// Points the current event at `id`, or clears it when `id` is unknown.
    pub async fn set_current_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        let mut views = self.views.write().await;
        views.current = self.repo.find_by_id(id).await?;
        Ok(views.current.clone())
    }

    pub async fn clear_current_event(&self) {
        self.views.write().await.current = None;
    }

    pub async fn events(&self) -> Result<Vec<Event>, AppError> {
        let _views = self.views.read().await;
        self.repo.list().await
    }

    pub async fn find_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn featured_events(&self) -> Vec<Event> {
        self.views.read().await.featured.clone()
    }

    pub async fn upcoming_events(&self) -> Vec<Event> {
        self.views.read().await.upcoming.clone()
    }

    pub async fn current_event(&self) -> Option<Event> {
        self.views.read().await.current.clone()
    }

    pub async fn snapshot(&self) -> Result<EventSnapshot, AppError> {
        let views = self.views.read().await;
        Ok(EventSnapshot {
            events: self.repo.list().await?,
            featured: views.featured.clone(),
            upcoming: views.upcoming.clone(),
            current: views.current.clone(),
        })
    }
}
