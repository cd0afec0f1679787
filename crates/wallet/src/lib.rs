//! Wallet feature: per-type currency balances with gain multipliers.
//!
//! Pure domain logic only: no IO, no persistence backend. Save data is a plain
//! serde structure that the game's save system stores wherever it likes.

pub mod save;
pub mod wallet;

pub use save::WalletSaveData;
pub use wallet::{WALLET_SAVE_KEY, Wallet};
