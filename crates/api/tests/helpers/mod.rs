#![allow(dead_code)]
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use killswitch_api::{create_api_routes, AppState, ControllerUseCases, MetadataUseCases};
use killswitch_application::ports::{ClientMetadataRepository, NetworkController};
use killswitch_application::use_cases::{
    BlockByTagUseCase, ControlClientUseCase, GetClientMetadataUseCase, ListDevicesUseCase,
    ListNetworkClientsUseCase, SaveClientMetadataUseCase, SetClientHiddenUseCase,
    SetDeviceBlockedUseCase, UpdateClientTagsUseCase,
};
use killswitch_domain::{DomainError, NetworkClient};
use killswitch_infrastructure::database::run_migrations;
use killswitch_infrastructure::repositories::SqliteClientMetadataRepository;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

/// Controller double: fixed station list, per-MAC failures, call log.
#[derive(Default)]
pub struct StubController {
    pub clients: RwLock<Vec<NetworkClient>>,
    pub failing_macs: RwLock<HashSet<String>>,
    pub list_error: RwLock<Option<DomainError>>,
    pub calls: RwLock<Vec<String>>,
}

impl StubController {
    async fn command(&self, action: &'static str, mac: &str) -> Result<(), DomainError> {
        if self.failing_macs.read().await.contains(mac) {
            return Err(DomainError::ClientOperationFailed {
                action,
                mac: mac.to_string(),
                reason: "HTTP 500 from /api/s/default/cmd/stamgr".to_string(),
            });
        }
        self.calls.write().await.push(format!("{} {}", action, mac));
        Ok(())
    }
}

#[async_trait]
impl NetworkController for StubController {
    async fn list_clients(&self) -> Result<Vec<NetworkClient>, DomainError> {
        if let Some(e) = self.list_error.read().await.clone() {
            return Err(e);
        }
        Ok(self.clients.read().await.clone())
    }

    async fn block(&self, mac: &str) -> Result<(), DomainError> {
        self.command("block", mac).await
    }

    async fn unblock(&self, mac: &str) -> Result<(), DomainError> {
        self.command("unblock", mac).await
    }
}

pub struct TestApp {
    pub router: Router,
    pub controller: Arc<StubController>,
    pub repo: Arc<SqliteClientMetadataRepository>,
}

pub fn station(mac: &str, hostname: &str) -> NetworkClient {
    let mut client = NetworkClient::new(mac);
    client.hostname = hostname.to_string();
    client.last_seen = chrono::Utc::now().timestamp() - 3_600;
    client
}

async fn build(with_controller: bool, api_key: Option<&str>) -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    let repo = Arc::new(SqliteClientMetadataRepository::new(pool));
    let controller = Arc::new(StubController::default());

    let metadata_repo: Arc<dyn ClientMetadataRepository> = repo.clone();
    let network: Arc<dyn NetworkController> = controller.clone();

    let metadata = MetadataUseCases {
        get_metadata: Arc::new(GetClientMetadataUseCase::new(metadata_repo.clone())),
        save_metadata: Arc::new(SaveClientMetadataUseCase::new(metadata_repo.clone())),
        set_hidden: Arc::new(SetClientHiddenUseCase::new(metadata_repo.clone())),
        update_tags: Arc::new(UpdateClientTagsUseCase::new(metadata_repo.clone())),
    };

    let controller_use_cases = with_controller.then(|| ControllerUseCases {
        list_clients: Arc::new(ListNetworkClientsUseCase::new(network.clone())),
        control_client: Arc::new(ControlClientUseCase::new(network.clone())),
        list_devices: Arc::new(ListDevicesUseCase::new(
            network.clone(),
            metadata_repo.clone(),
            30,
        )),
        set_blocked: Arc::new(SetDeviceBlockedUseCase::new(
            network.clone(),
            metadata_repo.clone(),
        )),
        block_by_tag: Arc::new(BlockByTagUseCase::new(network.clone(), metadata_repo.clone())),
    });

    let state = AppState {
        metadata,
        controller: controller_use_cases,
        api_key: api_key.map(Arc::from),
    };

    TestApp {
        router: create_api_routes(state),
        controller,
        repo,
    }
}

pub async fn create_test_app() -> TestApp {
    build(true, None).await
}

pub async fn create_unconfigured_app() -> TestApp {
    build(false, None).await
}

pub async fn create_app_with_api_key(key: &str) -> TestApp {
    build(true, Some(key)).await
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_with_headers(router, method, uri, body, &[]).await
}

pub async fn send_with_headers(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
