//! Type-safe price representation.
//!
//! Prices in this domain are whole rubles - the catalog has no fractional
//! currency, so the amount is a plain `i64` rather than a decimal type.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A price in whole rubles.
///
/// ## Examples
///
/// ```
/// use bestcakes_core::Price;
///
/// let unit = Price::new(2500);
/// let line = unit * 3;
/// assert_eq!(line, Price::new(7500));
/// assert_eq!(line.display(), "7500 ₽");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a new price from whole rubles.
    #[must_use]
    pub const fn new(rubles: i64) -> Self {
        Self(rubles)
    }

    /// Get the amount in whole rubles.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Checked addition, `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Checked multiplication by a quantity, `None` on overflow.
    #[must_use]
    pub const fn checked_mul(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as i64) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// Format for display (e.g., `"2500 ₽"`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} ₽", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₽", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<i64> for Price {
    fn from(rubles: i64) -> Self {
        Self(rubles)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
