// crates/domain/src/model/entities/sales_record.rs
/// Sales figure read from a single store file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesRecord {
    pub total: f64,
}

impl SalesRecord {
    #[must_use]
    pub const fn new(total: f64) -> Self {
        Self { total }
    }
}

impl From<f64> for SalesRecord {
    fn from(total: f64) -> Self {
        Self::new(total)
    }
}
