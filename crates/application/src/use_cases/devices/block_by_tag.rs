use crate::ports::{ClientMetadataRepository, NetworkController};
use crate::use_cases::validation::require_tag;
use killswitch_domain::{BlockAction, ClientMetadataUpdate, DomainError};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Outcome of a bulk block/unblock over every client carrying a tag.
#[derive(Debug)]
pub struct BulkBlockReport {
    pub tag: String,
    pub action: BlockAction,
    /// MACs changed on the controller and recorded locally, in processing order.
    pub processed: Vec<String>,
    /// The MAC that stopped the run and its error. Later MACs were not attempted.
    pub failure: Option<(String, DomainError)>,
}

impl BulkBlockReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Applies an action to each tagged client one at a time, stopping at the first
/// failure. Clients processed before the failure stay changed.
pub struct BlockByTagUseCase {
    controller: Arc<dyn NetworkController>,
    metadata_repo: Arc<dyn ClientMetadataRepository>,
}

impl BlockByTagUseCase {
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
    pub async fn execute(
        &self,
        tag: &str,
        action: BlockAction,
    ) -> Result<BulkBlockReport, DomainError> {
        let tag = require_tag(tag)?;
        let targets = self.metadata_repo.find_by_tag(&tag).await?;

        let mut report = BulkBlockReport {
            tag: tag.clone(),
            action,
            processed: Vec::with_capacity(targets.len()),
            failure: None,
        };

        for record in targets {
            if let Err(e) = self.apply_one(&record.mac, action).await {
                error!(mac = %record.mac, tag = %tag, error = %e, "Bulk action stopped");
                report.failure = Some((record.mac, e));
                break;
            }
            report.processed.push(record.mac);
        }

        info!(
            tag = %tag,
            action = %action,
            processed = report.processed.len(),
            complete = report.is_complete(),
            "Bulk action finished"
        );
        Ok(report)
    }

    async fn apply_one(&self, mac: &str, action: BlockAction) -> Result<(), DomainError> {
        self.controller.apply(action, mac).await?;
        self.metadata_repo
            .upsert(
                mac,
                &ClientMetadataUpdate::blocked(action.is_block(), chrono::Utc::now()),
            )
            .await?;
        Ok(())
    }
}
