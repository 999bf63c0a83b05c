use crate::ports::ClientMetadataRepository;
use crate::use_cases::validation::require_mac;
use killswitch_domain::{ClientMetadata, ClientMetadataUpdate, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct SetClientHiddenUseCase {
    metadata_repo: Arc<dyn ClientMetadataRepository>,
}

impl SetClientHiddenUseCase {
    pub fn new(metadata_repo: Arc<dyn ClientMetadataRepository>) -> Self {
        Self { metadata_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, mac: &str, hidden: bool) -> Result<ClientMetadata, DomainError> {
        let mac = require_mac(mac)?;
        let saved = self
            .metadata_repo
            .upsert(&mac, &ClientMetadataUpdate::hidden(hidden))
            .await?;
        info!(mac = %mac, hidden, "Client visibility updated");
        Ok(saved)
    }
}
