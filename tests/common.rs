use events_portal::{
    api::router::create_router,
    config::Config,
    domain::models::event::Event,
    domain::ports::EmailService,
    error::AppError,
    infra::{factory::build_state, seed::seed_events},
    state::AppState,
};
use std::sync::{Arc, Mutex};
use axum::{
    body::Body,
    http::{Request, header, StatusCode},
    response::Response,
    Router,
};
use async_trait::async_trait;
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_EMAIL: &str = "admin@avniet.edu";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Default)]
pub struct MockEmailService {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, recipient: &str, subject: &str, _body: &str) -> Result<(), AppError> {
        self.sent.lock().unwrap().push((recipient.to_string(), subject.to_string()));
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub mailer: Arc<MockEmailService>,
}

#[allow(dead_code)]
impl TestApp {
    /// The six launch events, no login delay.
    pub async fn new() -> Self {
        Self::with_events(seed_events()).await
    }

    pub async fn empty() -> Self {
        Self::with_events(Vec::new()).await
    }

    pub async fn with_events(events: Vec<Event>) -> Self {
        let config = Config {
            login_delay_ms: 0,
            ..Config::default()
        };

        let mailer = Arc::new(MockEmailService::default());
        let state = Arc::new(build_state(&config, events, mailer.clone()).await);
        let router = create_router(state.clone());

        Self { router, state, mailer }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self.request("GET", uri, None, None).await;
        let status = response.status();
        (status, parse_body(response).await)
    }

    /// Logs in with the default credentials and returns the `Cookie` header value.
    pub async fn login(&self) -> String {
        let payload = serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
        let response = self.request("POST", "/api/v1/auth/login", Some(payload), None).await;

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        session_cookie(&response).expect("No session_token cookie returned")
    }
}

pub fn session_cookie(response: &Response) -> Option<String> {
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|c| c.starts_with("session_token="))
        .map(|c| c.split(';').next().unwrap_or(c).to_string())
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

pub fn event_payload(title: &str, date: &str, featured: bool) -> Value {
    serde_json::json!({
        "title": title,
        "short_description": format!("{} in brief", title),
        "description": format!("Everything about {}", title),
        "date": date,
        "time": "10:00 AM - 4:00 PM",
        "venue": "Seminar Hall",
        "category": "Technical",
        "image": "https://example.com/event.png",
        "contact_info": "events@avniet.edu",
        "is_featured": featured
    })
}

pub fn team_payload(team_name: &str, members: usize) -> Value {
    let members: Vec<Value> = (0..members)
        .map(|i| serde_json::json!({
            "name": format!("Member {}", i),
            "email": format!("member{}@avniet.edu", i),
            "college_id": format!("AVN{:03}", i)
        }))
        .collect();

    serde_json::json!({
        "team_name": team_name,
        "leader_name": "Ravi Kumar",
        "leader_email": "ravi@avniet.edu",
        "leader_phone": "9876543210",
        "leader_branch": "Computer Science",
        "leader_year": "3",
        "members": members
    })
}

pub fn ids(value: &Value) -> Vec<String> {
    value.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}
