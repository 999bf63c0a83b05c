use crate::errors::ApiError;
use killswitch_application::use_cases::{
    BlockByTagUseCase, ControlClientUseCase, GetClientMetadataUseCase, ListDevicesUseCase,
    ListNetworkClientsUseCase, SaveClientMetadataUseCase, SetClientHiddenUseCase,
    SetDeviceBlockedUseCase, UpdateClientTagsUseCase,
};
use killswitch_domain::DomainError;
use std::sync::Arc;

/// Use cases backed only by the local store.
#[derive(Clone)]
pub struct MetadataUseCases {
    pub get_metadata: Arc<GetClientMetadataUseCase>,
    pub save_metadata: Arc<SaveClientMetadataUseCase>,
    pub set_hidden: Arc<SetClientHiddenUseCase>,
    pub update_tags: Arc<UpdateClientTagsUseCase>,
}

/// Use cases that need a reachable controller.
#[derive(Clone)]
pub struct ControllerUseCases {
    pub list_clients: Arc<ListNetworkClientsUseCase>,
    pub control_client: Arc<ControlClientUseCase>,
    pub list_devices: Arc<ListDevicesUseCase>,
    pub set_blocked: Arc<SetDeviceBlockedUseCase>,
    pub block_by_tag: Arc<BlockByTagUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub metadata: MetadataUseCases,
    /// `None` when no controller URL and API key are configured.
    pub controller: Option<ControllerUseCases>,
    /// Required on mutating requests when set.
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn controller(&self) -> Result<&ControllerUseCases, ApiError> {
        self.controller
            .as_ref()
            .ok_or_else(|| ApiError::from(DomainError::ControllerNotConfigured))
    }

    pub fn controller_configured(&self) -> bool {
        self.controller.is_some()
    }
}
