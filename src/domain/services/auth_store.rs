use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Sha256, Digest};
use tracing::{info, warn};
use crate::domain::{
    models::auth::{AdminCredentials, AdminUser, Role, SessionSnapshot},
    ports::EmailService,
};
use crate::error::AppError;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const UNKNOWN_RESET_EMAIL: &str = "Email not found";

#[derive(Debug, Default)]
struct Session {
    user: Option<AdminUser>,
    token_hash: Option<String>,
    is_loading: bool,
    error: Option<String>,
    reset_email_sent: bool,
}

impl Session {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_authenticated: self.user.is_some(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            reset_email_sent: self.reset_email_sent,
        }
    }
}

/// The single admin session of the process.
///
/// `Anonymous` and `Authenticated` are the only states; a login replaces any
/// earlier session token.
pub struct AuthStore {
    credentials: AdminCredentials,
    login_delay: Duration,
    email_service: Arc<dyn EmailService>,
    session: RwLock<Session>,
}

impl AuthStore {
    pub fn new(credentials: AdminCredentials, login_delay: Duration, email_service: Arc<dyn EmailService>) -> Self {
        Self {
            credentials,
            login_delay,
            email_service,
            session: RwLock::new(Session::default()),
        }
    }

    /// Returns the admin user and a fresh raw session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<(AdminUser, String), AppError> {
        {
            let mut session = self.session.write().await;
            session.is_loading = true;
            session.error = None;
        }

        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        let mut session = self.session.write().await;
        session.is_loading = false;

        if email != self.credentials.email || password != self.credentials.password {
            warn!("Rejected admin login for {}", email);
            session.error = Some(INVALID_CREDENTIALS.to_string());
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let user = AdminUser {
            email: self.credentials.email.clone(),
            name: self.credentials.name.clone(),
            role: Role::Admin,
        };
        let token: String = rand::thread_rng().sample_iter(&Alphanumeric).take(48).map(char::from).collect();

        session.user = Some(user.clone());
        session.token_hash = Some(hash_token(&token));
        session.error = None;

        info!("Admin logged in: {}", user.email);
        Ok((user, token))
    }

    pub async fn logout(&self) {
        let mut session = self.session.write().await;
        if let Some(user) = session.user.take() {
            info!("Admin logged out: {}", user.email);
        }
        session.token_hash = None;
    }

    /// Independent of the login state; only touches `reset_email_sent` and `error`.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        if email != self.credentials.email {
            warn!("Password reset requested for unknown address {}", email);
            let mut session = self.session.write().await;
            session.reset_email_sent = false;
            session.error = Some(UNKNOWN_RESET_EMAIL.to_string());
            return Err(AppError::NotFound(UNKNOWN_RESET_EMAIL.to_string()));
        }

        self.email_service
            .send(
                email,
                "Password reset requested",
                "A password reset was requested for the events portal admin account.",
            )
            .await?;

        let mut session = self.session.write().await;
        session.reset_email_sent = true;
        session.error = None;
        info!("Password reset notice sent to {}", email);
        Ok(())
    }

    pub async fn verify_token(&self, raw_token: &str) -> Option<AdminUser> {
        let session = self.session.read().await;
        match (&session.user, &session.token_hash) {
            (Some(user), Some(expected)) if *expected == hash_token(raw_token) => Some(user.clone()),
            _ => None,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
