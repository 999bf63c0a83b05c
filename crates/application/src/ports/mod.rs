mod client_metadata_repository;
mod network_controller;

pub use client_metadata_repository::{ClientMetadataMap, ClientMetadataRepository};
pub use network_controller::NetworkController;
