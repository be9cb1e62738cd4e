use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminUser {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// The static credential pair the portal accepts.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Read-only view of the process-wide session.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<AdminUser>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub reset_email_sent: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: AdminUser,
}
