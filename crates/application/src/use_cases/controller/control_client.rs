use crate::ports::NetworkController;
use crate::use_cases::validation::require_mac;
use killswitch_domain::{BlockAction, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Blocks or unblocks a station on the controller without touching local metadata.
pub struct ControlClientUseCase {
    controller: Arc<dyn NetworkController>,
}

impl ControlClientUseCase {
    pub fn new(controller: Arc<dyn NetworkController>) -> Self {
        Self { controller }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, mac: &str, action: BlockAction) -> Result<(), DomainError> {
        let mac = require_mac(mac)?;
        self.controller.apply(action, &mac).await?;
        info!(mac = %mac, action = %action, "Controller action applied");
        Ok(())
    }
}
