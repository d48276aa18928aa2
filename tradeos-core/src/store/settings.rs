//! Trade store settings

use crate::journal::DEFAULT_ACCOUNT_BALANCE;
use shared::Config;

/// Key under which the trade list is stored, before namespacing
pub const TRADES_KEY: &str = "trades";
/// Key under which the account balance is stored, before namespacing
pub const BALANCE_KEY: &str = "balance";

/// Storage layout and fallbacks of a [`TradeStore`](crate::store::TradeStore)
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Prefix joined to each key with `_`; empty for bare keys
    pub namespace: String,
    /// Balance used when none has been saved
    pub default_balance: f64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            namespace: "tradeos".to_string(),
            default_balance: DEFAULT_ACCOUNT_BALANCE,
        }
    }
}

impl StoreSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            namespace: config.storage_namespace.clone(),
            default_balance: config.default_account_balance,
        }
    }

    pub fn trades_key(&self) -> String {
        self.key(TRADES_KEY)
    }

    pub fn balance_key(&self) -> String {
        self.key(BALANCE_KEY)
    }

    fn key(&self, name: &str) -> String {
        if self.namespace.is_empty() {
            name.to_string()
        } else {
            format!("{}_{}", self.namespace, name)
        }
    }
}
