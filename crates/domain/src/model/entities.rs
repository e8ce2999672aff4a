pub mod sales_record;
pub mod store_totals;

pub use sales_record::SalesRecord;
pub use store_totals::StoreTotals;
