//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: discovering sales files under a root directory
//! - [`extraction`]: reading the sales total out of one file
//! - [`report`]: persisting the rendered summary
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extraction;
pub mod filesystem;
pub mod report;
