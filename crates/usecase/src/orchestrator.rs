use log::{debug, trace};
use sales_summary_domain::{Aggregator, ReportFormatter, SalesAggregate, SalesRecord};
use sales_summary_ports::{
    extraction::RecordExtractor,
    filesystem::{DiscoveryPlan, FileDiscoverer},
    report::ReportSink,
};
use sales_summary_shared_kernel::{ApplicationError, Result, SalesSummaryError, StoreId};

use crate::dto::SummaryOutput;

pub struct SummarizeSales<'a> {
    discoverer: &'a dyn FileDiscoverer,
    extractor: &'a dyn RecordExtractor,
    sink: &'a dyn ReportSink,
}

impl<'a> SummarizeSales<'a> {
    pub fn new(
        discoverer: &'a dyn FileDiscoverer,
        extractor: &'a dyn RecordExtractor,
        sink: &'a dyn ReportSink,
    ) -> Self {
        Self { discoverer, extractor, sink }
    }

    pub fn run(&self, plan: &DiscoveryPlan) -> Result<SummaryOutput> {
        self.sink.prepare().map_err(|e| ApplicationError::ReportFailed {
            reason: "could not prepare the output location".to_string(),
            source: Some(Box::new(e)),
        })?;

        let aggregate = self.aggregate(plan)?;
        debug!(
            "aggregated {} file(s) across {} store(s)",
            aggregate.record_count(),
            aggregate.store_count()
        );

        let report = ReportFormatter::format(&aggregate);
        let report_path = self.sink.write_report(report.as_str()).map_err(|e| ApplicationError::ReportFailed {
            reason: "could not persist the summary".to_string(),
            source: Some(Box::new(e)),
        })?;
        debug!("report written to {}", report_path.display());

        Ok(SummaryOutput { report_path, report, aggregate })
    }

    fn aggregate(&self, plan: &DiscoveryPlan) -> Result<SalesAggregate> {
        let discovery_failed = |e: SalesSummaryError| ApplicationError::DiscoveryFailed {
            reason: format!("under '{}'", plan.root.display()),
            source: Some(Box::new(e)),
        };
        let files = self.discoverer.discover(plan).map_err(discovery_failed)?;

        let records = files.map(|path| {
            let path = path.map_err(discovery_failed)?;
            let store = StoreId::from_path(&path);
            let record = SalesRecord::new(self.extractor.extract_total(&path));
            trace!("{} -> store '{store}', total {}", path.display(), record.total);
            Ok::<_, ApplicationError>((store, record))
        });
        Ok(Aggregator::try_aggregate(records)?)
    }
}
