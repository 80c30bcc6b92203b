//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
///
/// Used for service prices and booking amounts. The amount is kept as a
/// decimal in the currency's standard unit (e.g., euros, not cents) and is
/// serialized as a string to preserve precision on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }
}

/// ISO 4217 currency codes accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
    CHF,
    CAD,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_amount_as_string() {
        let price = Price::new(Decimal::new(4250, 2), CurrencyCode::EUR);
        let json = serde_json::to_value(&price).expect("serializable");
        assert_eq!(json["amount"], "42.50");
        assert_eq!(json["currency_code"], "EUR");
    }

    #[test]
    fn test_price_deserializes_without_currency() {
        let price: Price =
            serde_json::from_str(r#"{"amount":"19.99"}"#).expect("valid price json");
        assert_eq!(price.amount, Decimal::new(1999, 2));
        assert_eq!(price.currency_code, CurrencyCode::EUR);
    }
}
