pub mod client_metadata;
pub mod controller;
pub mod device;
pub mod tag;

pub use client_metadata::{
    ClientDataRequest, ClientMetadataResponse, ClientRecordResponse, SaveClientRequest,
};
pub use controller::{ControlClientRequest, MessageResponse};
pub use device::{
    DeviceListResponse, DeviceQuery, DeviceResponse, SetBlockedRequest, SetHiddenRequest,
};
pub use tag::{AddTagRequest, BulkActionResponse};
