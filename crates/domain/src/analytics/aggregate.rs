use sales_summary_shared_kernel::StoreId;

use crate::model::{GrandTotal, SalesRecord, StoreTotals};

/// Per-store totals plus the grand total for one run.
#[derive(Debug, Clone, Default)]
pub struct SalesAggregate {
    stores: StoreTotals,
    grand_total: GrandTotal,
    record_count: usize,
}

impl SalesAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into both the store accumulator and the grand total.
    pub fn record(&mut self, store: StoreId, record: SalesRecord) {
        self.stores.add(store, record.total);
        self.grand_total += record.total;
        self.record_count += 1;
    }

    #[must_use]
    pub fn stores(&self) -> &StoreTotals {
        &self.stores
    }

    #[must_use]
    pub fn grand_total(&self) -> GrandTotal {
        self.grand_total
    }

    #[must_use]
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

/// Aggregator folding `(store, record)` pairs into a [`SalesAggregate`].
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate<I>(records: I) -> SalesAggregate
    where
        I: IntoIterator<Item = (StoreId, SalesRecord)>,
    {
        records.into_iter().fold(SalesAggregate::new(), |mut acc, (store, record)| {
            acc.record(store, record);
            acc
        })
    }

    /// Like [`Aggregator::aggregate`], stopping at the first `Err`.
    pub fn try_aggregate<I, E>(records: I) -> Result<SalesAggregate, E>
    where
        I: IntoIterator<Item = Result<(StoreId, SalesRecord), E>>,
    {
        records.into_iter().try_fold(SalesAggregate::new(), |mut acc, item| {
            let (store, record) = item?;
            acc.record(store, record);
            Ok(acc)
        })
    }
}
