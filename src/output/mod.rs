//! Everything the pipeline writes to disk: CSV tables and the summary chart.

pub mod chart;
pub mod table;
