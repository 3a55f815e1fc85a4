//! Monetary value object for product pricing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A strictly positive amount of money, denominated in dinars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a Price, returning an error if the amount is not positive.
    ///
    /// Trailing fractional zeros are normalized away so a stored
    /// `2500.00` renders as `2500` in chat replies.
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::not_positive("price", amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Percent saved when this price is discounted to `sale`, rounded to
    /// the nearest whole percent (halves round away from zero).
    ///
    /// Returns `None` when `sale` is not a genuine discount.
    pub fn percent_off(&self, sale: &Price) -> Option<u32> {
        if sale.0 >= self.0 {
            return None;
        }
        let fraction = (self.0 - sale.0) / self.0 * Decimal::from(100);
        fraction
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
