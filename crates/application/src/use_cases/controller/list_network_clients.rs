use crate::ports::NetworkController;
use killswitch_domain::{DomainError, NetworkClient};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ListNetworkClientsUseCase {
    controller: Arc<dyn NetworkController>,
}

impl ListNetworkClientsUseCase {
    pub fn new(controller: Arc<dyn NetworkController>) -> Self {
        Self { controller }
    }

    #[instrument(skip(self), name = "list_network_clients")]
    pub async fn execute(&self) -> Result<Vec<NetworkClient>, DomainError> {
        let clients = self.controller.list_clients().await?;
        debug!(count = clients.len(), "Network clients retrieved");
        Ok(clients)
    }
}
