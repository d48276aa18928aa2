//! Account balance

use crate::error::ValidationError;
use crate::journal::{TradeValidator, DEFAULT_ACCOUNT_BALANCE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Starting capital the equity curve is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountBalance(f64);

impl AccountBalance {
    /// Create a balance, rejecting negative and non-finite values
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        TradeValidator::validate_balance(value)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Balance after adding a realized P&L
    pub fn after(&self, pnl: f64) -> f64 {
        self.0 + pnl
    }

    /// Growth of `equity` over this balance, in percent
    pub fn growth_percent(&self, equity: f64) -> f64 {
        if self.0 == 0.0 {
            return 0.0;
        }
        ((equity - self.0) / self.0) * 100.0
    }
}

impl Default for AccountBalance {
    fn default() -> Self {
        Self(DEFAULT_ACCOUNT_BALANCE)
    }
}

impl fmt::Display for AccountBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse the string form persisted under the `balance` key
impl FromStr for AccountBalance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid balance {:?}: {}", s, e))?;
        AccountBalance::new(value).map_err(|e| e.to_string())
    }
}
