//! Amount - Non-negative decimal wrapper for transfer quantities
//!
//! Balances and transfer amounts in BoardSig are never negative.
//! Proposals additionally require a strictly positive amount; that rule
//! lives in the engine, since a zero balance is perfectly valid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when working with amounts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),
}

/// A non-negative decimal amount.
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use boardsig_core::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
///
/// // Negative amounts are rejected
/// assert!(Amount::new(Decimal::new(-100, 0)).is_err());
///
/// // Parsing goes through the same check
/// let parsed: Amount = "12.5".parse().unwrap();
/// assert_eq!(parsed.value(), Decimal::new(125, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Amount from a Decimal.
    ///
    /// Returns an error if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            Err(AmountError::NegativeAmount(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Whole-unit amount, handy for seeding balances.
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns None on decimal overflow
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Returns None if the result would be negative
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        let result = self.0.checked_sub(other.0)?;
        if result < Decimal::ZERO {
            None
        } else {
            Some(Amount(result))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| AmountError::InvalidFormat(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_positive() {
        let amount = Amount::new(dec!(100)).unwrap();
        assert_eq!(amount.value(), dec!(100));
        assert!(!amount.is_zero());
    }

    #[test]
    fn test_amount_zero_is_valid() {
        let amount = Amount::new(Decimal::ZERO).unwrap();
        assert!(amount.is_zero());
        assert_eq!(amount, Amount::default());
    }

    #[test]
    fn test_amount_negative_rejected() {
        let result = Amount::new(dec!(-100));
        assert!(matches!(result, Err(AmountError::NegativeAmount(_))));
    }

    #[test]
    fn test_checked_sub_prevents_negative() {
        let a = Amount::from_units(50);
        let b = Amount::from_units(100);
        assert!(a.checked_sub(&b).is_none());
        assert_eq!(b.checked_sub(&a), Some(Amount::from_units(50)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("100".parse::<Amount>().unwrap(), Amount::from_units(100));
        assert_eq!(" 0.25 ".parse::<Amount>().unwrap().value(), dec!(0.25));
        assert!(matches!(
            "-1".parse::<Amount>(),
            Err(AmountError::NegativeAmount(_))
        ));
        assert!(matches!(
            "ten".parse::<Amount>(),
            Err(AmountError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde_rejects_negative() {
        let json = serde_json::to_string(&Amount::new(dec!(123.45)).unwrap()).unwrap();
        assert_eq!(json, "\"123.45\"");

        let negative: Result<Amount, _> = serde_json::from_str("\"-5\"");
        assert!(negative.is_err());
    }
}
