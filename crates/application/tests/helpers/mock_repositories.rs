#![allow(dead_code)]

use async_trait::async_trait;
use killswitch_application::ports::{
    ClientMetadataMap, ClientMetadataRepository, NetworkController,
};
use killswitch_domain::{
    canonical_mac, ClientMetadata, ClientMetadataUpdate, DomainError, NetworkClient,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockClientMetadataRepository {
    records: Arc<RwLock<ClientMetadataMap>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockClientMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<ClientMetadata>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.records.write().await;
            for record in records {
                map.insert(record.mac.clone(), record);
            }
        }
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn record(&self, mac: &str) -> Option<ClientMetadata> {
        self.records.read().await.get(&canonical_mac(mac)).cloned()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ClientMetadataRepository for MockClientMetadataRepository {
    async fn get(&self, mac: &str) -> Result<Option<ClientMetadata>, DomainError> {
        self.check_failure().await?;
        Ok(self.record(mac).await)
    }

    async fn get_all(&self) -> Result<ClientMetadataMap, DomainError> {
        self.check_failure().await?;
        Ok(self.records.read().await.clone())
    }

    async fn upsert(
        &self,
        mac: &str,
        update: &ClientMetadataUpdate,
    ) -> Result<ClientMetadata, DomainError> {
        self.check_failure().await?;
        let key = canonical_mac(mac);
        let mut map = self.records.write().await;
        let record = map
            .entry(key.clone())
            .or_insert_with(|| ClientMetadata::new(&key));
        update.apply_to(record);
        Ok(record.clone())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<ClientMetadata>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.has_tag(tag))
            .cloned()
            .collect())
    }

    async fn get_hidden_states(&self) -> Result<BTreeMap<String, bool>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .map(|(mac, r)| (mac.clone(), r.hidden))
            .collect())
    }

    async fn get_blocked_states(&self) -> Result<BTreeMap<String, bool>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .map(|(mac, r)| (mac.clone(), r.blocked))
            .collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerCall {
    Block(String),
    Unblock(String),
}

#[derive(Clone, Default)]
pub struct MockNetworkController {
    clients: Arc<RwLock<Vec<NetworkClient>>>,
    failing_macs: Arc<RwLock<HashSet<String>>>,
    list_fails: Arc<RwLock<bool>>,
    calls: Arc<RwLock<Vec<ControllerCall>>>,
}

impl MockNetworkController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_clients(clients: Vec<NetworkClient>) -> Self {
        let controller = Self::new();
        *controller.clients.write().await = clients;
        controller
    }

    pub async fn fail_for(&self, mac: &str) {
        self.failing_macs.write().await.insert(mac.to_string());
    }

    pub async fn set_list_fails(&self, fails: bool) {
        *self.list_fails.write().await = fails;
    }

    pub async fn calls(&self) -> Vec<ControllerCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: ControllerCall, mac: &str) -> Result<(), DomainError> {
        if self.failing_macs.read().await.contains(mac) {
            return Err(DomainError::ClientOperationFailed {
                action: match call {
                    ControllerCall::Block(_) => "block",
                    ControllerCall::Unblock(_) => "unblock",
                },
                mac: mac.to_string(),
                reason: "HTTP 500".to_string(),
            });
        }
        self.calls.write().await.push(call);
        Ok(())
    }
}

#[async_trait]
impl NetworkController for MockNetworkController {
    async fn list_clients(&self) -> Result<Vec<NetworkClient>, DomainError> {
        if *self.list_fails.read().await {
            return Err(DomainError::ClientRetrievalFailed(
                "all endpoints failed".to_string(),
            ));
        }
        Ok(self.clients.read().await.clone())
    }

    async fn block(&self, mac: &str) -> Result<(), DomainError> {
        self.record(ControllerCall::Block(mac.to_string()), mac).await
    }

    async fn unblock(&self, mac: &str) -> Result<(), DomainError> {
        self.record(ControllerCall::Unblock(mac.to_string()), mac)
            .await
    }
}
