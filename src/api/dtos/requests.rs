use crate::domain::models::{
    event::{EventPatch, NewEventParams},
    registration::{NewTeamRegistration, TeamMember},
};
use crate::domain::services::views::{SortDirection, SortKey};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Deserialize, Default)]
pub struct EventQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct AdminEventQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub category: String,
    pub image: String,
    pub contact_info: String,
    #[serde(default)]
    pub is_featured: bool,
    pub organizer: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
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
    /// Absent leaves the organizer, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub organizer: Option<Option<String>>,
}

#[derive(Deserialize)]
pub struct RegisterTeamRequest {
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_branch: String,
    pub leader_year: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<CreateEventRequest> for NewEventParams {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            short_description: req.short_description,
            description: req.description,
            date: req.date,
            time: req.time,
            venue: req.venue,
            category: req.category,
            image: req.image,
            contact_info: req.contact_info,
            is_featured: req.is_featured,
            organizer: req.organizer,
        }
    }
}

impl From<UpdateEventRequest> for EventPatch {
    fn from(req: UpdateEventRequest) -> Self {
        Self {
            title: req.title,
            short_description: req.short_description,
            description: req.description,
            date: req.date,
            time: req.time,
            venue: req.venue,
            category: req.category,
            image: req.image,
            contact_info: req.contact_info,
            is_featured: req.is_featured,
            organizer: req.organizer,
        }
    }
}

impl RegisterTeamRequest {
    pub fn for_event(self, event_id: String) -> NewTeamRegistration {
        NewTeamRegistration {
            event_id,
            team_name: self.team_name,
            leader_name: self.leader_name,
            leader_email: self.leader_email,
            leader_phone: self.leader_phone,
            leader_branch: self.leader_branch,
            leader_year: self.leader_year,
            members: self.members,
        }
    }
}
