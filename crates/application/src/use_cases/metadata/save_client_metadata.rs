use crate::ports::ClientMetadataRepository;
use crate::use_cases::validation::require_mac;
use killswitch_domain::{ClientMetadata, ClientMetadataUpdate, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Upsert-by-MAC of a partial metadata record.
pub struct SaveClientMetadataUseCase {
    metadata_repo: Arc<dyn ClientMetadataRepository>,
}

impl SaveClientMetadataUseCase {
    pub fn new(metadata_repo: Arc<dyn ClientMetadataRepository>) -> Self {
        Self { metadata_repo }
    }

    #[instrument(skip(self, update))]
    pub async fn execute(
        &self,
        mac: &str,
        update: ClientMetadataUpdate,
    ) -> Result<ClientMetadata, DomainError> {
        let mac = require_mac(mac)?;
        let saved = self.metadata_repo.upsert(&mac, &update).await?;
        info!(mac = %saved.mac, tags = saved.tags.len(), "Client metadata saved");
        Ok(saved)
    }
}
