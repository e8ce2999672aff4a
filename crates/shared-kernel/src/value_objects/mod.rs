// crates/shared-kernel/src/value_objects/mod.rs
pub mod currency;
pub mod store_id;

pub use currency::Currency;
pub use store_id::StoreId;
