use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    pub login_delay_ms: u64,
    pub seed_events: bool,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            admin_name: env::var("ADMIN_NAME").unwrap_or(defaults.admin_name),
            login_delay_ms: env::var("LOGIN_DELAY_MS")
                .map(|v| v.parse().expect("LOGIN_DELAY_MS must be a number of milliseconds"))
                .unwrap_or(defaults.login_delay_ms),
            seed_events: env_flag("SEED_EVENTS", defaults.seed_events),
            secure_cookies: env_flag("SECURE_COOKIES", defaults.secure_cookies),
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            admin_email: "admin@avniet.edu".to_string(),
            admin_password: "admin123".to_string(),
            admin_name: "Admin User".to_string(),
            login_delay_ms: 1000,
            seed_events: true,
            secure_cookies: false,
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}
