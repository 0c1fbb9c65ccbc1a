use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use tokio::net::TcpListener;

use ipbeacon_common::error::ResolveError;
use ipbeacon_core::local::ifconfig::parse_inet;
use ipbeacon_core::local::InterfaceSource;

pub type Fields = BTreeMap<String, String>;

/// Serves `router` on an ephemeral loopback port for the rest of the test.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A "what is my IP" endpoint answering every GET with a fixed status and body.
pub async fn ip_endpoint(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().route("/", get(move || async move { (status, body) }));
    format!("http://{}/", serve(router).await)
}

/// Answers only after `delay`.
pub async fn slow_ip_endpoint(delay: Duration) -> String {
    let router = Router::new().route(
        "/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, r#"{"ip":"8.8.8.8"}"#)
        }),
    );
    format!("http://{}/", serve(router).await)
}

/// A URL nothing listens on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

#[derive(Clone)]
struct WebhookState {
    status: StatusCode,
    received: Arc<Mutex<Vec<Fields>>>,
}

/// Webhook recording every body it gets. `/form` expects form encoding, `/json` JSON.
pub struct Webhook {
    pub base: String,
    received: Arc<Mutex<Vec<Fields>>>,
}

impl Webhook {
    pub async fn start(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = WebhookState {
            status,
            received: received.clone(),
        };
        let router = Router::new()
            .route("/form", post(record_form))
            .route("/json", post(record_json))
            .with_state(state);

        Self {
            base: format!("http://{}", serve(router).await),
            received,
        }
    }

    pub fn form_url(&self) -> String {
        format!("{}/form", self.base)
    }

    pub fn json_url(&self) -> String {
        format!("{}/json", self.base)
    }

    pub fn received(&self) -> Vec<Fields> {
        self.received.lock().unwrap().clone()
    }
}

async fn record_form(State(state): State<WebhookState>, Form(fields): Form<Fields>) -> StatusCode {
    state.received.lock().unwrap().push(fields);
    state.status
}

async fn record_json(State(state): State<WebhookState>, Json(fields): Json<Fields>) -> StatusCode {
    state.received.lock().unwrap().push(fields);
    state.status
}

/// Stands in for the OS: hands canned `ifconfig` output to the real parser.
pub struct IfconfigOutput(pub &'static str);

impl InterfaceSource for IfconfigOutput {
    fn inet_address(&self, _interface: &str) -> Result<Option<String>, ResolveError> {
        Ok(parse_inet(self.0))
    }
}

pub fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
