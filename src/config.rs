// src/config.rs
use std::path::{Path, PathBuf};

use sales_summary_ports::filesystem::DiscoveryPlan;
use sales_summary_shared_kernel::path::logical_absolute;

pub const STORES_DIR: &str = "stores";
pub const SALES_FILE_PATTERN: &str = "*.json";
pub const OUTPUT_DIR: &str = "salesTotalDir";
pub const SUMMARY_FILE: &str = "salesSummary.txt";

/// Fixed input and output locations, resolved against a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub stores_dir: PathBuf,
    pub pattern: String,
    pub output_dir: PathBuf,
    pub summary_file: String,
}

impl SummaryConfig {
    pub fn from_working_dir(cwd: &Path) -> Self {
        let cwd = logical_absolute(cwd);
        Self {
            stores_dir: cwd.join(STORES_DIR),
            pattern: SALES_FILE_PATTERN.to_string(),
            output_dir: cwd.join(OUTPUT_DIR),
            summary_file: SUMMARY_FILE.to_string(),
        }
    }

    pub fn from_current_dir() -> std::io::Result<Self> {
        std::env::current_dir().map(|cwd| Self::from_working_dir(&cwd))
    }

    pub fn discovery_plan(&self) -> DiscoveryPlan {
        DiscoveryPlan::new(&self.stores_dir, &self.pattern)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }
}
