use crate::ports::{ClientMetadataMap, ClientMetadataRepository};
use killswitch_domain::{canonical_mac, ClientMetadata, DomainError};
use std::sync::Arc;

pub struct GetClientMetadataUseCase {
    metadata_repo: Arc<dyn ClientMetadataRepository>,
}

impl GetClientMetadataUseCase {
    pub fn new(metadata_repo: Arc<dyn ClientMetadataRepository>) -> Self {
        Self { metadata_repo }
    }

    pub async fn get_all(&self) -> Result<ClientMetadataMap, DomainError> {
        self.metadata_repo.get_all().await
    }

    pub async fn get(&self, mac: &str) -> Result<Option<ClientMetadata>, DomainError> {
        self.metadata_repo.get(&canonical_mac(mac)).await
    }
}
