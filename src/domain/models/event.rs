use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use std::borrow::Cow;
use std::collections::HashMap;
use validator::{Validate, ValidationError};
use crate::domain::services::dates::parse_event_date;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct Event {
    pub id: String,
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"), length(max = 150, message = "Short description must be at most 150 characters"))]
    pub short_description: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    /// Display form, shown as entered.
    pub date: String,
    /// Calendar date resolved from `date`; all ordering uses this.
    pub starts_on: NaiveDate,
    #[validate(custom(function = "not_blank"))]
    pub time: String,
    #[validate(custom(function = "not_blank"))]
    pub venue: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(url(message = "Image must be a valid URL"), custom(function = "web_scheme"))]
    pub image: String,
    #[validate(custom(function = "not_blank"))]
    pub contact_info: String,
    pub is_featured: bool,
    pub organizer: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub category: String,
    pub image: String,
    pub contact_info: String,
    pub is_featured: bool,
    pub organizer: Option<String>,
}

/// Shallow patch: `None` leaves the field untouched.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub contact_info: Option<String>,
    pub is_featured: Option<bool>,
    /// `Some(None)` clears the organizer.
    pub organizer: Option<Option<String>>,
}

impl Event {
    pub fn new(params: NewEventParams) -> Result<Self, AppError> {
        let starts_on = resolve_date(&params.date)?;

        let event = Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            short_description: params.short_description,
            description: params.description,
            date: params.date,
            starts_on,
            time: params.time,
            venue: params.venue,
            category: params.category,
            image: params.image,
            contact_info: params.contact_info,
            is_featured: params.is_featured,
            organizer: params.organizer,
            created_at: Utc::now(),
        };

        event.validate()?;
        Ok(event)
    }

    /// Returns the merged event; `self` is left untouched when the merge is invalid.
    pub fn merged(&self, patch: EventPatch) -> Result<Self, AppError> {
        let mut event = self.clone();

        if let Some(val) = patch.title { event.title = val; }
        if let Some(val) = patch.short_description { event.short_description = val; }
        if let Some(val) = patch.description { event.description = val; }
        if let Some(val) = patch.date {
            event.starts_on = resolve_date(&val)?;
            event.date = val;
        }
        if let Some(val) = patch.time { event.time = val; }
        if let Some(val) = patch.venue { event.venue = val; }
        if let Some(val) = patch.category { event.category = val; }
        if let Some(val) = patch.image { event.image = val; }
        if let Some(val) = patch.contact_info { event.contact_info = val; }
        if let Some(val) = patch.is_featured { event.is_featured = val; }
        if let Some(val) = patch.organizer { event.organizer = val; }

        event.validate()?;
        Ok(event)
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::from("This field is required"));
        return Err(err);
    }
    Ok(())
}

fn web_scheme(value: &str) -> Result<(), ValidationError> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        let mut err = ValidationError::new("scheme");
        err.message = Some(Cow::from("Image must be an http(s) URL"));
        return Err(err);
    }
    Ok(())
}

fn resolve_date(raw: &str) -> Result<NaiveDate, AppError> {
    parse_event_date(raw)
        .ok_or_else(|| AppError::Validation(format!("Unrecognised event date '{}'", raw)))
}

/// An event as served to clients, with its registration count computed from
/// the registration log at read time.
#[derive(Debug, Serialize, Clone)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub registered_teams: usize,
}

impl EventView {
    pub fn new(event: Event, counts: &HashMap<String, usize>) -> Self {
        let registered_teams = counts.get(&event.id).copied().unwrap_or(0);
        Self { event, registered_teams }
    }

    pub fn project(events: Vec<Event>, counts: &HashMap<String, usize>) -> Vec<Self> {
        events.into_iter().map(|e| Self::new(e, counts)).collect()
    }
}
