//! Derived views over the canonical event list.
//!
//! Every function here is pure and order-preserving where it does not sort;
//! all sorts are stable so events sharing a date keep their list order.

use crate::domain::models::event::Event;
use chrono::NaiveDate;
use serde::Deserialize;
use std::cmp::Ordering;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    #[default]
    Date,
    Category,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

pub fn featured(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| e.is_featured).cloned().collect()
}

pub fn upcoming(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.starts_on);
    sorted
}

/// Events strictly before `today`, most recent first.
pub fn past(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut past: Vec<Event> = events.iter().filter(|e| e.starts_on < today).cloned().collect();
    past.sort_by(|a, b| b.starts_on.cmp(&a.starts_on));
    past
}

/// Case-insensitive substring match on title or description, combined with an
/// exact category match. `None`, empty and `"all"` disable the respective filter.
pub fn search(events: &[Event], query: Option<&str>, category: Option<&str>) -> Vec<Event> {
    let needle = query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase);
    let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

    events
        .iter()
        .filter(|e| match &needle {
            Some(n) => e.title.to_lowercase().contains(n) || e.description.to_lowercase().contains(n),
            None => true,
        })
        .filter(|e| category.map_or(true, |c| e.category == c))
        .cloned()
        .collect()
}

/// `"all"` followed by each distinct category in first-seen order.
pub fn categories(events: &[Event]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for event in events {
        if !out.iter().skip(1).any(|c| c == &event.category) {
            out.push(event.category.clone());
        }
    }
    out
}

pub fn sort_by(events: &mut [Event], key: SortKey, direction: SortDirection) {
    events.sort_by(|a, b| {
        let ord = match key {
            SortKey::Title => compare_text(&a.title, &b.title),
            SortKey::Date => a.starts_on.cmp(&b.starts_on),
            SortKey::Category => compare_text(&a.category, &b.category),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(id: &str, title: &str, date: (i32, u32, u32), category: &str, featured: bool) -> Event {
        let starts_on = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Event {
            id: id.into(),
            title: title.into(),
            short_description: format!("{} in short", title),
            description: format!("All about {}", title),
            date: starts_on.to_string(),
            starts_on,
            time: "10:00 AM".into(),
            venue: "Campus".into(),
            category: category.into(),
            image: "https://example.com/e.png".into(),
            contact_info: "events@avniet.edu".into(),
            is_featured: featured,
            organizer: None,
            created_at: Utc::now(),
        }
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    fn sample() -> Vec<Event> {
        vec![
            event("a", "Robotics", (2025, 9, 8), "Technical", false),
            event("b", "Harmony", (2025, 6, 10), "Cultural", true),
            event("c", "Summit", (2025, 6, 10), "Business", true),
            event("d", "Sports Meet", (2025, 1, 5), "Sports", false),
        ]
    }

    #[test]
    fn test_featured_keeps_list_order() {
        assert_eq!(ids(&featured(&sample())), vec!["b", "c"]);
    }

    #[test]
    fn test_upcoming_is_stable_on_ties() {
        assert_eq!(ids(&upcoming(&sample())), vec!["d", "b", "c", "a"]);

        let mut swapped = sample();
        swapped.swap(1, 2);
        assert_eq!(ids(&upcoming(&swapped)), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_past_is_most_recent_first() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(ids(&past(&sample(), today)), vec!["b", "c", "d"]);

        let same_day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(ids(&past(&sample(), same_day)), vec!["d"]);
    }

    #[test]
    fn test_search_matches_title_or_description_case_insensitively() {
        assert_eq!(ids(&search(&sample(), Some("ROBO"), None)), vec!["a"]);
        assert_eq!(ids(&search(&sample(), Some("all about s"), None)), vec!["c", "d"]);
        assert_eq!(ids(&search(&sample(), Some("  "), Some("all"))).len(), 4);
    }

    #[test]
    fn test_search_category_is_exact() {
        assert_eq!(ids(&search(&sample(), None, Some("Cultural"))), vec!["b"]);
        assert!(search(&sample(), None, Some("cultural")).is_empty());
        assert!(search(&sample(), Some("robotics"), Some("Sports")).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut events = sample();
        events.push(event("e", "Hackathon", (2025, 3, 3), "Technical", false));
        assert_eq!(categories(&events), vec!["all", "Technical", "Cultural", "Business", "Sports"]);
    }

    #[test]
    fn test_sort_by_each_key_and_direction() {
        let mut events = sample();
        sort_by(&mut events, SortKey::Title, SortDirection::Asc);
        assert_eq!(ids(&events), vec!["b", "a", "d", "c"]);

        sort_by(&mut events, SortKey::Category, SortDirection::Desc);
        assert_eq!(ids(&events), vec!["a", "d", "b", "c"]);

        let mut events = sample();
        sort_by(&mut events, SortKey::Date, SortDirection::Desc);
        assert_eq!(ids(&events), vec!["a", "b", "c", "d"]);
    }
}
