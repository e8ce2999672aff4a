pub mod aggregate;
pub mod sort;

pub use aggregate::{Aggregator, SalesAggregate};
pub use sort::sorted_by_store;
