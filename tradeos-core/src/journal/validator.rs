//! Trade and balance validation

use crate::error::ValidationError;
use crate::journal::{TradeRecord, TradeStatus};

/// Input checks shared by the entry form path and direct record inserts
pub struct TradeValidator;

impl TradeValidator {
    /// Check raw price and size fields
    pub fn validate_prices(
        entry_price: f64,
        exit_price: f64,
        quantity: f64,
    ) -> Result<(), ValidationError> {
        if !entry_price.is_finite() || entry_price <= 0.0 {
            return Err(ValidationError::NonPositiveEntryPrice(entry_price));
        }
        if !exit_price.is_finite() || exit_price < 0.0 {
            return Err(ValidationError::InvalidExitPrice(exit_price));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ValidationError::NonPositiveQuantity(quantity));
        }

        Ok(())
    }

    /// Check a complete record before it enters the journal.
    ///
    /// Besides the price fields, the outcome must agree with the record: an
    /// open trade (exit price 0) is RUNNING with zero P&L, and a closed
    /// trade's status follows the sign of its P&L.
    pub fn validate_record(record: &TradeRecord) -> Result<(), ValidationError> {
        Self::validate_prices(record.entry_price, record.exit_price, record.quantity)?;

        if !record.pnl.is_finite() || !record.pnl_percent.is_finite() {
            return Err(ValidationError::NonFinitePnl {
                pnl: record.pnl,
                pnl_percent: record.pnl_percent,
            });
        }

        let consistent = if record.exit_price == 0.0 {
            record.status == TradeStatus::Running && record.pnl == 0.0 && record.pnl_percent == 0.0
        } else {
            record.status != TradeStatus::Running && record.status == TradeStatus::from_pnl(record.pnl)
        };
        if !consistent {
            return Err(ValidationError::InconsistentStatus {
                status: record.status,
                exit_price: record.exit_price,
                pnl: record.pnl,
            });
        }

        Ok(())
    }

    /// Check an account balance value
    pub fn validate_balance(value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidBalance(value));
        }

        Ok(())
    }
}
