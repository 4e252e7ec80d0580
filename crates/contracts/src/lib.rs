//! Types shared by the backend and the frontend: dataset records,
//! filter definitions and the catalog query pipeline.

pub mod domain;
pub mod shared;
