//! Filter definitions, selected filter values and the catalog query pipeline

pub mod config;
pub mod query;
pub mod state;

pub use config::*;
pub use query::*;
pub use state::*;
