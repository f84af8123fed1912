//! Internet-usage statistics pipeline: load the wide per-country CSV,
//! reshape it to long form, derive growth and continent columns, then
//! aggregate and write the summary tables and chart.

pub mod enrich;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod reshape;
pub mod stats;

pub use enrich::LongRecord;
pub use ingest::{WideRow, WideTable};
pub use pipeline::PipelineRun;
