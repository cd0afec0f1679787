//! Currency types and currency values.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A kind of in-game currency.
///
/// The set is closed: every variant must also be listed in [`CurrencyType::ALL`]
/// so that tables keyed by currency type cover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyType {
    Money,
    Secondary,
}

impl CurrencyType {
    /// Number of currency types.
    pub const COUNT: usize = 2;

    /// Every currency type, in table order.
    pub const ALL: [CurrencyType; Self::COUNT] = [CurrencyType::Money, CurrencyType::Secondary];

    /// Dense position of this type inside [`CurrencyType::ALL`].
    pub const fn index(self) -> usize {
        match self {
            CurrencyType::Money => 0,
            CurrencyType::Secondary => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyType::Money => "Money",
            CurrencyType::Secondary => "Secondary",
        }
    }
}

impl core::fmt::Display for CurrencyType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount of one currency type.
///
/// Amounts are floating point because idle games routinely reach magnitudes
/// far beyond any integer type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "type")]
    currency_type: CurrencyType,
    amount: f64,
}

impl ValueObject for Currency {}

impl Currency {
    pub fn new(amount: f64, currency_type: CurrencyType) -> Self {
        Self {
            currency_type,
            amount,
        }
    }

    pub fn money(amount: f64) -> Self {
        Self::new(amount, CurrencyType::Money)
    }

    pub fn secondary(amount: f64) -> Self {
        Self::new(amount, CurrencyType::Secondary)
    }

    pub fn currency_type(&self) -> CurrencyType {
        self.currency_type
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// A currency is valid when its amount is finite and not negative.
    pub fn is_valid(&self) -> bool {
        self.amount.is_finite() && self.amount >= 0.0
    }

    /// Scale the amount in place.
    pub fn multiply(&mut self, factor: f64) {
        self.amount *= factor;
    }

    /// Consuming variant of [`Currency::multiply`].
    pub fn multiplied(mut self, factor: f64) -> Self {
        self.multiply(factor);
        self
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_lists_every_type_at_its_index() {
        for (i, t) in CurrencyType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn validity_rejects_negative_and_non_finite_amounts() {
        assert!(Currency::money(0.0).is_valid());
        assert!(Currency::money(12.5).is_valid());
        assert!(!Currency::money(-1.0).is_valid());
        assert!(!Currency::money(f64::NAN).is_valid());
        assert!(!Currency::money(f64::INFINITY).is_valid());
    }

    #[test]
    fn multiply_scales_in_place() {
        let mut c = Currency::secondary(10.0);
        c.multiply(2.5);
        assert_eq!(c, Currency::secondary(25.0));
        assert_eq!(c.currency_type(), CurrencyType::Secondary);
    }

    #[test]
    fn negative_factor_makes_currency_invalid() {
        let c = Currency::money(10.0).multiplied(-1.0);
        assert!(!c.is_valid());
    }

    #[test]
    fn display_is_amount_then_type() {
        assert_eq!(Currency::money(10.0).to_string(), "10 Money");
        assert_eq!(Currency::secondary(0.5).to_string(), "0.5 Secondary");
    }

    #[test]
    fn serializes_type_under_type_key() {
        let json = serde_json::to_value(Currency::money(3.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Money", "amount": 3.0 }));

        let back: Currency = serde_json::from_value(json).unwrap();
        assert_eq!(back, Currency::money(3.0));
    }

    proptest! {
        /// Any finite, non-negative amount scaled by a finite, non-negative
        /// factor stays valid unless it overflows to infinity.
        #[test]
        fn non_negative_scaling_preserves_validity(
            amount in 0.0f64..1e12,
            factor in 0.0f64..1e6,
        ) {
            let c = Currency::money(amount).multiplied(factor);
            prop_assert!(c.is_valid());
            prop_assert_eq!(c.amount(), amount * factor);
        }
    }
}
