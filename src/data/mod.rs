//! Data module - Timing dataset and its literal sample

mod dataset;
pub mod sample;

pub use dataset::{Dataset, DatasetError, Series, MIN_SERIES};
