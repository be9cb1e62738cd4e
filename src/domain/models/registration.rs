use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use validator::Validate;

pub const MAX_TEAM_MEMBERS: usize = 5;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct TeamMember {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 3, message = "College ID is required"))]
    pub college_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamRegistration {
    pub id: String,
    pub event_id: String,
    pub team_name: String,
    pub leader_name: String,
    pub leader_email: String,
    pub leader_phone: String,
    pub leader_branch: String,
    pub leader_year: String,
    pub members: Vec<TeamMember>,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewTeamRegistration {
    pub event_id: String,
    #[validate(length(min = 3, message = "Team name must be at least 3 characters"))]
    pub team_name: String,
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub leader_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub leader_email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub leader_phone: String,
    #[validate(length(min = 2, message = "Branch is required"))]
    pub leader_branch: String,
    #[validate(length(min = 1, message = "Year is required"))]
    pub leader_year: String,
    #[validate(length(max = 5, message = "Maximum 5 members allowed"), nested)]
    pub members: Vec<TeamMember>,
}

impl TeamRegistration {
    pub fn new(params: NewTeamRegistration) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: params.event_id,
            team_name: params.team_name,
            leader_name: params.leader_name,
            leader_email: params.leader_email,
            leader_phone: params.leader_phone,
            leader_branch: params.leader_branch,
            leader_year: params.leader_year,
            members: params.members,
            registered_at: Utc::now(),
        }
    }
}
