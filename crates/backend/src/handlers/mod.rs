pub mod a001_dataset;
