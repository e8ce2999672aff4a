// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod config;

pub use app::{COMPLETION_PREFIX, run, run_in};
pub use config::SummaryConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
