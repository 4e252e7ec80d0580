pub mod repository;
pub mod service;
pub mod test_data;
