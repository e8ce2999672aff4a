//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: discovery, extraction, aggregation and report writing
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::SummaryOutput;
pub use orchestrator::SummarizeSales;
