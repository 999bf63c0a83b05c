pub mod get_client_metadata;
pub mod save_client_metadata;
pub mod set_client_hidden;
pub mod update_client_tags;

pub use get_client_metadata::GetClientMetadataUseCase;
pub use save_client_metadata::SaveClientMetadataUseCase;
pub use set_client_hidden::SetClientHiddenUseCase;
pub use update_client_tags::UpdateClientTagsUseCase;
