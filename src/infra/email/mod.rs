pub mod log_email_service;
