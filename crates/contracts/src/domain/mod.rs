pub mod a001_dataset;
pub mod common;
