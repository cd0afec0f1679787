//! `idlekit-core` — domain building blocks shared by game features.
//!
//! This crate contains **pure domain** primitives (no logging setup, no IO).

pub mod currency;
pub mod error;
pub mod feature;
pub mod table;
pub mod value_object;

pub use currency::{Currency, CurrencyType};
pub use error::{DomainError, DomainResult};
pub use feature::Feature;
pub use table::CurrencyTable;
pub use value_object::ValueObject;
