use serde::{Deserialize, Serialize};

/// Persisted wallet state.
///
/// Only `Money` and `Secondary` balances are persisted. Multipliers are not
/// saved; whatever grants them re-applies them after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletSaveData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}
