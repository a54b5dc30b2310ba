//! Integer price representation.
//!
//! Prices are stored in the smallest currency unit (cents), matching what
//! the catalog documents hold. All arithmetic stays in integers; formatting
//! for display happens at the presentation edge.

use serde::{Deserialize, Serialize};

/// A non-negative amount in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Amount in cents.
    #[must_use]
    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    /// Multiply by a quantity (line-item subtotal).
    ///
    /// Saturates instead of wrapping; a catalog price large enough to
    /// saturate is already nonsense input.
    #[must_use]
    pub const fn times(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(qty as i64))
    }

    /// Sum an iterator of prices. Saturates like [`Self::times`].
    #[must_use]
    pub fn sum(prices: impl IntoIterator<Item = Self>) -> Self {
        Self(
            prices
                .into_iter()
                .fold(0_i64, |acc, p| acc.saturating_add(p.0)),
        )
    }

    /// Format for display, e.g. `$19.99`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
