pub mod block_by_tag;
pub mod list_devices;
pub mod set_device_blocked;

pub use block_by_tag::{BlockByTagUseCase, BulkBlockReport};
pub use list_devices::{DeviceListing, ListDevicesUseCase};
pub use set_device_blocked::SetDeviceBlockedUseCase;
