pub mod aggregate;
pub mod filter_configs;

pub use aggregate::{Dataset, DatasetDto, DatasetId, FieldValue};
pub use filter_configs::filter_configs;
