pub mod builders;

pub use builders::{MetadataBuilder, NetworkClientBuilder};
