pub mod client_metadata_repository;

pub use client_metadata_repository::SqliteClientMetadataRepository;
