use crate::ports::{ClientMetadataRepository, NetworkController};
use crate::use_cases::validation::require_mac;
use killswitch_domain::{BlockAction, ClientMetadata, ClientMetadataUpdate, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Changes a station's access on the controller and records the intent locally.
///
/// The controller call goes first; if it fails nothing is written.
pub struct SetDeviceBlockedUseCase {
    controller: Arc<dyn NetworkController>,
    metadata_repo: Arc<dyn ClientMetadataRepository>,
}

impl SetDeviceBlockedUseCase {
    pub fn new(
        controller: Arc<dyn NetworkController>,
        metadata_repo: Arc<dyn ClientMetadataRepository>,
    ) -> Self {
        Self {
            controller,
            metadata_repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, mac: &str, blocked: bool) -> Result<ClientMetadata, DomainError> {
        let mac = require_mac(mac)?;
        let action = BlockAction::from_blocked(blocked);

        self.controller.apply(action, &mac).await?;

        let saved = self
            .metadata_repo
            .upsert(&mac, &ClientMetadataUpdate::blocked(blocked, chrono::Utc::now()))
            .await?;

        info!(mac = %mac, action = %action, "Device block state changed");
        Ok(saved)
    }
}
