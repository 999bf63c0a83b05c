use async_trait::async_trait;
use killswitch_domain::{ClientMetadata, ClientMetadataUpdate, DomainError};
use std::collections::BTreeMap;

/// Metadata records keyed by canonical MAC.
pub type ClientMetadataMap = BTreeMap<String, ClientMetadata>;

#[async_trait]
pub trait ClientMetadataRepository: Send + Sync {
    async fn get(&self, mac: &str) -> Result<Option<ClientMetadata>, DomainError>;

    async fn get_all(&self) -> Result<ClientMetadataMap, DomainError>;

    /// Create the record with defaults if missing, then apply `update`.
    async fn upsert(
        &self,
        mac: &str,
        update: &ClientMetadataUpdate,
    ) -> Result<ClientMetadata, DomainError>;

    /// Records carrying `tag`, ordered by MAC.
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<ClientMetadata>, DomainError>;

    async fn get_hidden_states(&self) -> Result<BTreeMap<String, bool>, DomainError>;

    async fn get_blocked_states(&self) -> Result<BTreeMap<String, bool>, DomainError>;
}
