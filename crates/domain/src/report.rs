// crates/domain/src/report.rs
use std::fmt::{self, Write};

use sales_summary_shared_kernel::Currency;

use crate::analytics::{SalesAggregate, sorted_by_store};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const TITLE: &str = "Sales Summary";
const RULE: &str = "----------------------------";

/// Rendered summary text, produced once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a [`SalesAggregate`] into the fixed report layout.
pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn format(aggregate: &SalesAggregate) -> Report {
        Self::format_with(aggregate, LINE_ENDING)
    }

    /// Same as [`ReportFormatter::format`] with an explicit line terminator.
    #[must_use]
    pub fn format_with(aggregate: &SalesAggregate, eol: &str) -> Report {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = Self::write_report(&mut out, aggregate, eol);
        Report(out)
    }

    fn write_report(out: &mut String, aggregate: &SalesAggregate, eol: &str) -> fmt::Result {
        write!(out, "{TITLE}{eol}")?;
        write!(out, "{RULE}{eol}")?;
        write!(out, " Total Sales: {}{eol}", aggregate.grand_total().as_currency())?;
        write!(out, "{eol}")?;
        write!(out, " Details:{eol}")?;
        for (store, total) in sorted_by_store(aggregate.stores()) {
            write!(out, "  {store}: {}{eol}", Currency::usd(total))?;
        }
        Ok(())
    }
}
