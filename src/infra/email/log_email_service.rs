use crate::domain::ports::EmailService;
use crate::error::AppError;
use async_trait::async_trait;
use tracing::info;

/// Writes outgoing mail to the log instead of delivering it.
pub struct LogEmailService;

#[async_trait]
impl EmailService for LogEmailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), AppError> {
        info!(recipient, subject, body_len = body.len(), "Outgoing email (not delivered)");
        Ok(())
    }
}
