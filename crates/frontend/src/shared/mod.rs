pub mod api_utils;
pub mod components;
pub mod filter_context;
pub mod icons;
pub mod list_utils;
