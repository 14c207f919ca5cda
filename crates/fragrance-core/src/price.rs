//! Price type for catalog amounts.
//!
//! The catalog API sends prices as plain JSON numbers in dollars, so the
//! amount is kept as received and only rounded when formatted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol shown in front of every rendered price.
pub const CURRENCY_SYMBOL: &str = "$";

/// A non-negative decimal amount as supplied by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a price from a decimal amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Get the raw decimal amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Format with exactly two fractional digits (e.g., "42.00").
    ///
    /// ```
    /// use fragrance_core::Price;
    /// assert_eq!(Price::new(19.999).display_amount(), "20.00");
    /// ```
    pub fn display_amount(&self) -> String {
        match half_up_cents(self.0) {
            Some(cents) => {
                let sign = if self.0 < 0.0 && cents != 0 { "-" } else { "" };
                format!("{}{}.{:02}", sign, cents / 100, cents % 100)
            }
            None => format!("{:.2}", self.0),
        }
    }

    /// Format as a display string with symbol (e.g., "$42.00").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }
}

/// Whole cents of `|amount|`, ties rounded away from zero.
///
/// Works on the exact binary value, so `10.125` becomes 1013 while `1.005`
/// (stored just below the tie) becomes 100.
fn half_up_cents(amount: f64) -> Option<u128> {
    if !amount.is_finite() {
        return None;
    }

    let bits = amount.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    // mantissa < 2^53, so scaled < 2^60
    let scaled = u128::from(mantissa) * 100;
    if exponent >= 0 {
        return (exponent < 60).then(|| scaled << exponent);
    }

    let shift = exponent.unsigned_abs();
    if shift > 60 {
        return Some(0);
    }
    let whole = scaled >> shift;
    let rest = scaled - (whole << shift);
    let half = 1u128 << (shift - 1);
    Some(if rest >= half { whole + 1 } else { whole })
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
