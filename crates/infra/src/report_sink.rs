// crates/infra/src/report_sink.rs
use std::path::PathBuf;

use sales_summary_ports::report::ReportSink;
use sales_summary_shared_kernel::{ErrorContext, Result};

use crate::persistence::FileWriter;

/// Writes the summary to `<dir>/<file_name>`, creating `dir` when missing.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    dir: PathBuf,
    file_name: String,
}

impl FileReportSink {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { dir: dir.into(), file_name: file_name.into() }
    }

    pub fn target(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl ReportSink for FileReportSink {
    fn prepare(&self) -> Result<()> {
        FileWriter::ensure_dir(&self.dir)
            .with_context(|| format!("Failed to create directory '{}'", self.dir.display()))
    }

    fn write_report(&self, contents: &str) -> Result<PathBuf> {
        let target = self.target();
        FileWriter::atomic_write(&target, contents.as_bytes())
            .with_context(|| format!("Failed to write file '{}'", target.display()))?;
        Ok(target)
    }
}
