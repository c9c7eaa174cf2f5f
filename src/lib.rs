//! Converts `cargo bench` text reports into chart-ready throughput records.
//! Run the `benchfmt` binary with an input report and an output JSON path.

pub mod classify;
pub mod cli;
pub mod convert;
pub mod errors;
pub mod extract;
pub mod report;
pub mod report_gen;

pub use crate::classify::{ClassifiedBench, OperationKind, classify};
pub use crate::convert::{Throughput, round2, throughput};
pub use crate::errors::BenchFmtError;
pub use crate::extract::{RawMeasurement, extract_measurements};
pub use crate::report::{ChartRecord, THROUGHPUT_UNIT, convert_report, render_document};
