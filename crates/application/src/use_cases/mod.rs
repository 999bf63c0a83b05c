pub mod controller;
pub mod devices;
pub mod metadata;
mod validation;

// Re-export use cases
pub use controller::{ControlClientUseCase, ListNetworkClientsUseCase};
pub use devices::{
    BlockByTagUseCase, BulkBlockReport, DeviceListing, ListDevicesUseCase,
    SetDeviceBlockedUseCase,
};
pub use metadata::{
    GetClientMetadataUseCase, SaveClientMetadataUseCase, SetClientHiddenUseCase,
    UpdateClientTagsUseCase,
};
