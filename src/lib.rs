//! Sortplot - Sorting Time Comparison Chart
//!
//! Plots recorded insertion sort and heap sort timings against input size
//! as a line chart with one marker style per algorithm.

pub mod charts;
pub mod data;
pub mod gui;
