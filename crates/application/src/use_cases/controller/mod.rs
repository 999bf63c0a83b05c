pub mod control_client;
pub mod list_network_clients;

pub use control_client::ControlClientUseCase;
pub use list_network_clients::ListNetworkClientsUseCase;
