#![allow(dead_code)]
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

pub const VERIFY_PATH: &str = "/proxy/network/integration/v1/sites";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub api_key: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<RwLock<HashMap<(Method, String), (StatusCode, Value)>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

/// In-process stand-in for a UniFi controller. Unregistered routes answer 404.
pub struct MockController {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockController {
    /// Starts on an ephemeral port with the key verification route answering 200.
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        let mock = Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        };
        mock.respond(Method::GET, VERIFY_PATH, 200, json!({ "data": [] }))
            .await;
        mock
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state
            .routes
            .write()
            .await
            .insert((method, path.to_string()), (status, body));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    pub async fn hits(&self, method: Method, path: &str) -> usize {
        self.state
            .requests
            .read()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Paths requested with `method`, in order.
    pub async fn paths(&self, method: Method) -> Vec<String> {
        self.state
            .requests
            .read()
            .await
            .iter()
            .filter(|r| r.method == method)
            .map(|r| r.path.clone())
            .collect()
    }
}

impl Drop for MockController {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.write().await.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        api_key: headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    match state.routes.read().await.get(&(method, path)) {
        Some((status, _)) if *status == StatusCode::NO_CONTENT => (*status).into_response(),
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response(),
    }
}
