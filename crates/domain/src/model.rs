pub mod entities;
pub mod value_objects;

pub use entities::{SalesRecord, StoreTotals};
pub use value_objects::GrandTotal;
