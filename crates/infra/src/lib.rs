// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extraction;
pub mod filesystem;
pub mod persistence;
pub mod report_sink;

pub use extraction::JsonTotalExtractor;
pub use filesystem::GlobFileDiscoverer;
pub use report_sink::FileReportSink;
