// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use sales_summary_shared_kernel::Result;

/// Input parameters controlling file discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPlan {
    pub root: PathBuf,
    /// File-name glob, e.g. `*.json`.
    pub pattern: String,
}

impl DiscoveryPlan {
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self { root: root.into(), pattern: pattern.into() }
    }
}

/// Lazy, single-pass sequence of discovered file paths.
///
/// An `Err` item means part of the tree could not be read; consumers stop there.
pub type DiscoveredFiles = Box<dyn Iterator<Item = Result<PathBuf>>>;

/// Port for recursively discovering files.
///
/// A missing root yields an empty sequence. Result ordering is unspecified.
pub trait FileDiscoverer {
    fn discover(&self, plan: &DiscoveryPlan) -> Result<DiscoveredFiles>;
}
