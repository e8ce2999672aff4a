#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod report;

pub use analytics::{Aggregator, SalesAggregate};
pub use model::{GrandTotal, SalesRecord, StoreTotals};
pub use report::{LINE_ENDING, Report, ReportFormatter};
