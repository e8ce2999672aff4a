use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use sales_summary_infra::{FileReportSink, GlobFileDiscoverer, JsonTotalExtractor};
use sales_summary_usecase::{SummarizeSales, SummaryOutput};

use crate::config::SummaryConfig;

pub const COMPLETION_PREFIX: &str = "Sales summary created at:";

/// Summarise `./stores` into `./salesTotalDir/salesSummary.txt`.
///
/// Returns the completion line for the caller to print.
pub fn run() -> Result<String> {
    let config = SummaryConfig::from_current_dir().context("failed to resolve the working directory")?;
    execute(&config).map(|output| completion_message(&output))
}

/// Same as [`run`] with an explicit working directory.
pub fn run_in(cwd: &Path) -> Result<SummaryOutput> {
    execute(&SummaryConfig::from_working_dir(cwd))
}

fn execute(config: &SummaryConfig) -> Result<SummaryOutput> {
    debug!("sales_summary v{} reading {}", crate::VERSION, config.stores_dir.display());

    let discoverer = GlobFileDiscoverer::new();
    let extractor = JsonTotalExtractor::new();
    let sink = FileReportSink::new(&config.output_dir, &config.summary_file);

    SummarizeSales::new(&discoverer, &extractor, &sink)
        .run(&config.discovery_plan())
        .with_context(|| format!("failed to create {}", config.summary_path().display()))
}

fn completion_message(output: &SummaryOutput) -> String {
    format!("{COMPLETION_PREFIX} {}", output.report_path.display())
}
