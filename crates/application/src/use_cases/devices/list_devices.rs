use crate::ports::{ClientMetadataRepository, NetworkController};
use killswitch_domain::{
    canonical_mac, recent_cutoff, tag_counts, Device, DeviceFilter, DomainError, TagCount,
    ViewCounts,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Filtered devices plus the tallies the dashboard shows on its filter buttons.
#[derive(Debug, Clone)]
pub struct DeviceListing {
    pub devices: Vec<Device>,
    pub tags: Vec<TagCount>,
    pub counts: ViewCounts,
}

pub struct ListDevicesUseCase {
    controller: Arc<dyn NetworkController>,
    metadata_repo: Arc<dyn ClientMetadataRepository>,
    recent_window_days: u32,
}

impl ListDevicesUseCase {
    pub fn new(
        controller: Arc<dyn NetworkController>,
        metadata_repo: Arc<dyn ClientMetadataRepository>,
        recent_window_days: u32,
    ) -> Self {
        Self {
            controller,
            metadata_repo,
            recent_window_days,
        }
    }

    #[instrument(skip(self), name = "list_devices")]
    pub async fn execute(&self, filter: &DeviceFilter) -> Result<DeviceListing, DomainError> {
        let (clients, metadata) = tokio::try_join!(
            self.controller.list_clients(),
            self.metadata_repo.get_all()
        )?;

        let devices: Vec<Device> = clients
            .into_iter()
            .map(|client| {
                let meta = metadata.get(&canonical_mac(&client.mac));
                Device::merge(client, meta)
            })
            .collect();

        let cutoff = recent_cutoff(chrono::Utc::now(), self.recent_window_days);
        let listing = DeviceListing {
            tags: tag_counts(&devices),
            counts: ViewCounts::tally(&devices, cutoff),
            devices: filter.apply(&devices, cutoff),
        };

        debug!(
            total = listing.counts.all,
            returned = listing.devices.len(),
            "Devices merged"
        );
        Ok(listing)
    }
}
