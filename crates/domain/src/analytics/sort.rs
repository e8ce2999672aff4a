// domain analytics sorting utilities
use sales_summary_shared_kernel::StoreId;

use crate::model::StoreTotals;

/// Store entries ordered by [`StoreId`]'s case-insensitive ordering, ascending.
#[must_use]
pub fn sorted_by_store(totals: &StoreTotals) -> Vec<(&StoreId, f64)> {
    let mut entries: Vec<_> = totals.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
