// crates/shared-kernel/src/value_objects/currency.rs
use std::{fmt, iter::Sum, ops::Add};

const SYMBOL: char = '$';
const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// Monetary amount rendered with US-locale conventions (`$1,234.50`).
///
/// Cents are rounded from the exact binary value of the amount, so `1.115`
/// (stored as `1.11499…`) renders `$1.11`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Currency(f64);

impl Currency {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub const fn usd(amount: f64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl Add for Currency {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Currency {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<f64> for Currency {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = if self.0.is_finite() { self.0 } else { 0.0 };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        if amount.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            f.write_str("-")?;
        }
        write!(f, "{SYMBOL}{}{DECIMAL_SEPARATOR}{cents}", group_thousands(whole))
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
