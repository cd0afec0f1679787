//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two currencies of the same type and amount are the
//! same currency.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Currency {
///     currency_type: CurrencyType,
///     amount: f64,
/// }
///
/// impl ValueObject for Currency {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
