//! UniFi Kill Switch Domain Layer
pub mod block_action;
pub mod client_metadata;
pub mod config;
pub mod device;
pub mod device_filter;
pub mod errors;
pub mod network_client;

pub use block_action::BlockAction;
pub use client_metadata::{canonical_mac, ClientMetadata, ClientMetadataUpdate};
pub use config::{CliOverrides, Config, ConfigError};
pub use device::Device;
pub use device_filter::{
    recent_cutoff, tag_counts, DeviceFilter, DeviceView, TagCount, ViewCounts, RECENT_WINDOW_DAYS,
};
pub use errors::DomainError;
pub use network_client::NetworkClient;
