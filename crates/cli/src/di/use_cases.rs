use super::Repositories;
use killswitch_api::{AppState, ControllerUseCases, MetadataUseCases};
use killswitch_application::ports::{ClientMetadataRepository, NetworkController};
use killswitch_application::use_cases::{
    BlockByTagUseCase, ControlClientUseCase, GetClientMetadataUseCase, ListDevicesUseCase,
    ListNetworkClientsUseCase, SaveClientMetadataUseCase, SetClientHiddenUseCase,
    SetDeviceBlockedUseCase, UpdateClientTagsUseCase,
};
use killswitch_domain::{Config, DomainError};
use killswitch_infrastructure::unifi::UnifiController;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub metadata: MetadataUseCases,
    /// Absent when no controller URL and API key are configured.
    pub controller: Option<ControllerUseCases>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories) -> Result<Self, DomainError> {
        let metadata_repo: Arc<dyn ClientMetadataRepository> = repos.client_metadata.clone();

        let metadata = MetadataUseCases {
            get_metadata: Arc::new(GetClientMetadataUseCase::new(metadata_repo.clone())),
            save_metadata: Arc::new(SaveClientMetadataUseCase::new(metadata_repo.clone())),
            set_hidden: Arc::new(SetClientHiddenUseCase::new(metadata_repo.clone())),
            update_tags: Arc::new(UpdateClientTagsUseCase::new(metadata_repo.clone())),
        };

        let controller = if config.controller.is_configured() {
            let network: Arc<dyn NetworkController> =
                Arc::new(UnifiController::new(&config.controller)?);
            info!(
                controller = config.controller.base_url().unwrap_or_default(),
                site = %config.controller.site,
                "UniFi controller configured"
            );
            Some(controller_use_cases(
                network,
                metadata_repo,
                config.controller.recent_window_days,
            ))
        } else {
            None
        };

        Ok(Self {
            metadata,
            controller,
        })
    }

    pub fn into_app_state(self, api_key: Option<&str>) -> AppState {
        AppState {
            metadata: self.metadata,
            controller: self.controller,
            api_key: api_key.filter(|k| !k.is_empty()).map(Arc::from),
        }
    }
}

fn controller_use_cases(
    network: Arc<dyn NetworkController>,
    metadata_repo: Arc<dyn ClientMetadataRepository>,
    recent_window_days: u32,
) -> ControllerUseCases {
    ControllerUseCases {
        list_clients: Arc::new(ListNetworkClientsUseCase::new(network.clone())),
        control_client: Arc::new(ControlClientUseCase::new(network.clone())),
        list_devices: Arc::new(ListDevicesUseCase::new(
            network.clone(),
            metadata_repo.clone(),
            recent_window_days,
        )),
        set_blocked: Arc::new(SetDeviceBlockedUseCase::new(
            network.clone(),
            metadata_repo.clone(),
        )),
        block_by_tag: Arc::new(BlockByTagUseCase::new(network, metadata_repo)),
    }
}
