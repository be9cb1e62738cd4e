use std::sync::Arc;
use events_portal::domain::models::event::{Event, EventPatch, NewEventParams};
use events_portal::domain::services::event_store::{EventSnapshot, EventStore};
use events_portal::infra::repositories::memory_event_repo::MemoryEventRepo;
use events_portal::infra::seed::seed_events;

fn params(title: &str, date: &str, featured: bool) -> NewEventParams {
    NewEventParams {
        title: title.to_string(),
        short_description: format!("{} in brief", title),
        description: format!("Everything about {}", title),
        date: date.to_string(),
        time: "10:00 AM".to_string(),
        venue: "Seminar Hall".to_string(),
        category: "Workshop".to_string(),
        image: "https://example.com/e.png".to_string(),
        contact_info: "events@avniet.edu".to_string(),
        is_featured: featured,
        organizer: None,
    }
}

async fn seeded_store() -> EventStore {
    EventStore::load(Arc::new(MemoryEventRepo::new(seed_events()))).await.unwrap()
}

fn assert_views_consistent(snap: &EventSnapshot) {
    let expected_featured: Vec<&Event> = snap.events.iter().filter(|e| e.is_featured).collect();
    let featured: Vec<&Event> = snap.featured.iter().collect();
    assert_eq!(featured, expected_featured, "featured view is stale");

    assert_eq!(snap.upcoming.len(), snap.events.len());
    for pair in snap.upcoming.windows(2) {
        assert!(pair[0].starts_on <= pair[1].starts_on, "upcoming is not sorted");
        if pair[0].starts_on == pair[1].starts_on {
            let pos = |id: &str| snap.events.iter().position(|e| e.id == id).unwrap();
            assert!(pos(pair[0].id.as_str()) < pos(pair[1].id.as_str()), "upcoming is not stable on ties");
        }
    }
    for event in &snap.events {
        assert!(snap.upcoming.contains(event), "upcoming lost {}", event.id);
    }

    if let Some(current) = &snap.current {
        assert!(snap.events.contains(current), "current event is stale");
    }
}

#[tokio::test]
async fn test_views_stay_consistent_across_mutations() {
    let store = seeded_store().await;
    assert_views_consistent(&store.snapshot().await.unwrap());

    store.set_current_event("4").await.unwrap();

    let dates = ["2025-03-01", "June 10, 2025", "Aug 20, 2025", "2025-06-10", "January 2, 2026"];
    let mut added = Vec::new();
    for (i, date) in dates.iter().enumerate() {
        let event = store.add_event(params(&format!("Added {}", i), date, i % 2 == 0)).await.unwrap();
        added.push(event.id);
        assert_views_consistent(&store.snapshot().await.unwrap());
    }

    store.update_event("4", EventPatch { is_featured: Some(false), ..Default::default() }).await.unwrap();
    assert_views_consistent(&store.snapshot().await.unwrap());
    assert!(!store.current_event().await.unwrap().is_featured);

    store.update_event(&added[1], EventPatch { date: Some("2024-12-31".into()), ..Default::default() }).await.unwrap();
    let snap = store.snapshot().await.unwrap();
    assert_views_consistent(&snap);
    assert_eq!(snap.upcoming[0].id, added[1]);

    assert!(store.delete_event(&added[0]).await.unwrap());
    assert!(store.delete_event("4").await.unwrap());
    let snap = store.snapshot().await.unwrap();
    assert_views_consistent(&snap);
    assert_eq!(snap.events.len(), 9);
    assert!(snap.current.is_none());
}

#[tokio::test]
async fn test_add_assigns_unique_ids() {
    let store = EventStore::load(Arc::new(MemoryEventRepo::new(Vec::new()))).await.unwrap();

    let a = store.add_event(params("One", "2025-01-01", true)).await.unwrap();
    let b = store.add_event(params("Two", "2025-01-01", true)).await.unwrap();
    assert_ne!(a.id, b.id);

    let upcoming: Vec<String> = store.upcoming_events().await.into_iter().map(|e| e.id).collect();
    assert_eq!(upcoming, vec![a.id.clone(), b.id.clone()]);
    assert_eq!(store.featured_events().await.len(), 2);
}

#[tokio::test]
async fn test_unknown_ids_are_reported_not_applied() {
    let store = seeded_store().await;
    let before = store.snapshot().await.unwrap();

    let updated = store.update_event("missing", EventPatch { title: Some("Ghost".into()), ..Default::default() }).await.unwrap();
    assert!(updated.is_none());
    assert!(!store.delete_event("missing").await.unwrap());
    assert!(store.set_current_event("missing").await.unwrap().is_none());

    let after = store.snapshot().await.unwrap();
    assert_eq!(after.events, before.events);
    assert_eq!(after.upcoming, before.upcoming);
}

#[tokio::test]
async fn test_failed_update_changes_nothing() {
    let store = seeded_store().await;

    let result = store.update_event("1", EventPatch {
        title: Some("Renamed".into()),
        date: Some("not a date".into()),
        ..Default::default()
    }).await;
    assert!(result.is_err());

    let event = store.find_event("1").await.unwrap().unwrap();
    assert_eq!(event.title, "Tech Symposium 2025");
}

#[tokio::test]
async fn test_delete_then_set_current_is_absent() {
    let store = seeded_store().await;

    assert!(store.delete_event("3").await.unwrap());
    assert!(store.set_current_event("3").await.unwrap().is_none());
    assert!(store.current_event().await.is_none());

    assert_eq!(store.set_current_event("2").await.unwrap().unwrap().id, "2");
    store.clear_current_event().await;
    assert!(store.current_event().await.is_none());
}
