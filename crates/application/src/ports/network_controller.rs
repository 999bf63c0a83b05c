use async_trait::async_trait;
use killswitch_domain::{BlockAction, DomainError, NetworkClient};

#[async_trait]
pub trait NetworkController: Send + Sync {
    /// Recent or blocked stations, normalized and deduplicated by MAC.
    async fn list_clients(&self) -> Result<Vec<NetworkClient>, DomainError>;

    async fn block(&self, mac: &str) -> Result<(), DomainError>;

    async fn unblock(&self, mac: &str) -> Result<(), DomainError>;

    async fn apply(&self, action: BlockAction, mac: &str) -> Result<(), DomainError> {
        match action {
            BlockAction::Block => self.block(mac).await,
            BlockAction::Unblock => self.unblock(mac).await,
        }
    }
}
