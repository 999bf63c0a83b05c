pub mod mock_controller;

pub use mock_controller::{MockController, VERIFY_PATH};
