use std::path::PathBuf;

use sales_summary_domain::{Report, SalesAggregate};

/// Result of one summary run.
#[derive(Debug, Clone)]
pub struct SummaryOutput {
    pub report_path: PathBuf,
    pub report: Report,
    pub aggregate: SalesAggregate,
}
