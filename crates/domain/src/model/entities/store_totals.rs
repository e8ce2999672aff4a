// crates/domain/src/model/entities/store_totals.rs
use std::collections::{HashMap, hash_map::Entry};

use sales_summary_shared_kernel::StoreId;

/// Accumulated sales per store.
///
/// Keys follow [`StoreId`]'s case-insensitive identity; the casing of the
/// first id seen for a store is the one kept.
#[derive(Debug, Clone, Default)]
pub struct StoreTotals {
    totals: HashMap<StoreId, f64>,
}

impl StoreTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `amount` into the accumulator for `store`.
    pub fn add(&mut self, store: StoreId, amount: f64) {
        match self.totals.entry(store) {
            Entry::Occupied(mut entry) => *entry.get_mut() += amount,
            Entry::Vacant(entry) => {
                entry.insert(amount);
            }
        }
    }

    #[must_use]
    pub fn get(&self, store: &StoreId) -> Option<f64> {
        self.totals.get(store).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Entries in unspecified order; see [`crate::analytics::sorted_by_store`].
    pub fn iter(&self) -> impl Iterator<Item = (&StoreId, f64)> {
        self.totals.iter().map(|(id, total)| (id, *total))
    }

    /// Sum of every store accumulator.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.totals.values().sum()
    }
}
