// crates/ports/src/report.rs
use std::path::PathBuf;

use sales_summary_shared_kernel::Result;

/// Port for persisting the rendered summary.
pub trait ReportSink {
    /// Make the destination ready (e.g. create the output directory) before any input is read.
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Write `contents`, replacing any previous report, and return where it landed.
    fn write_report(&self, contents: &str) -> Result<PathBuf>;
}
