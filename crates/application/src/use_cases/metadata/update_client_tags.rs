use crate::ports::ClientMetadataRepository;
use crate::use_cases::validation::{require_mac, require_tag};
use killswitch_domain::{ClientMetadata, ClientMetadataUpdate, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct UpdateClientTagsUseCase {
    metadata_repo: Arc<dyn ClientMetadataRepository>,
}

impl UpdateClientTagsUseCase {
    pub fn new(metadata_repo: Arc<dyn ClientMetadataRepository>) -> Self {
        Self { metadata_repo }
    }

    /// Appends a trimmed tag; adding a tag the client already carries is a no-op.
    #[instrument(skip(self))]
    pub async fn add_tag(&self, mac: &str, tag: &str) -> Result<ClientMetadata, DomainError> {
        let mac = require_mac(mac)?;
        let tag = require_tag(tag)?;

        let mut record = self.load_or_default(&mac).await?;
        if !record.add_tag(&tag) {
            debug!(mac = %mac, tag = %tag, "Tag already present");
        }

        let saved = self
            .metadata_repo
            .upsert(&mac, &ClientMetadataUpdate::tags(record.tags))
            .await?;
        info!(mac = %mac, tag = %tag, "Tag added");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn remove_tag(&self, mac: &str, tag: &str) -> Result<ClientMetadata, DomainError> {
        let mac = require_mac(mac)?;

        let mut record = self.load_or_default(&mac).await?;
        if !record.remove_tag(tag) {
            debug!(mac = %mac, tag = %tag, "Tag not present");
        }

        let saved = self
            .metadata_repo
            .upsert(&mac, &ClientMetadataUpdate::tags(record.tags))
            .await?;
        info!(mac = %mac, tag = %tag, "Tag removed");
        Ok(saved)
    }

    async fn load_or_default(&self, mac: &str) -> Result<ClientMetadata, DomainError> {
        Ok(self
            .metadata_repo
            .get(mac)
            .await?
            .unwrap_or_else(|| ClientMetadata::new(mac)))
    }
}
