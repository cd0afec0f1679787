//! Domain error model.

use thiserror::Error;

use crate::currency::Currency;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Rejections are reported to the caller but never leave partial state behind:
/// an operation that returns an error has not mutated anything.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A currency value failed its own validity rule (non-finite or negative amount).
    #[error("invalid currency: {0}")]
    InvalidCurrency(Currency),

    /// Save data could not be encoded or decoded.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn invalid_currency(currency: Currency) -> Self {
        Self::InvalidCurrency(currency)
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// The rejected currency, if this error is a currency rejection.
    pub fn rejected_currency(&self) -> Option<&Currency> {
        match self {
            Self::InvalidCurrency(c) => Some(c),
            Self::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyType;

    #[test]
    fn invalid_currency_message_names_the_value() {
        let err = DomainError::invalid_currency(Currency::new(-3.0, CurrencyType::Money));
        assert_eq!(err.to_string(), "invalid currency: -3 Money");
        assert_eq!(
            err.rejected_currency().map(|c| c.amount()),
            Some(-3.0)
        );
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DomainError = json_err.into();
        assert!(matches!(err, DomainError::Serialization(_)));
        assert!(err.rejected_currency().is_none());
    }
}
