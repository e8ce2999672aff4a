// crates/domain/src/model/value_objects/grand_total.rs
use std::ops::AddAssign;

use sales_summary_shared_kernel::Currency;

/// Running sum of every record regardless of store.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct GrandTotal(f64);

impl GrandTotal {
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    #[must_use]
    pub const fn as_currency(self) -> Currency {
        Currency::usd(self.0)
    }
}

impl AddAssign<f64> for GrandTotal {
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}
