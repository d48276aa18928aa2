//! P&L derivation for new journal entries

use crate::journal::{Direction, TradeStatus};

/// Realized P&L and outcome derived for a trade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PnlOutcome {
    /// P&L in quote currency: price move times quantity
    pub pnl: f64,
    /// Return relative to entry price, percent, two decimals
    pub pnl_percent: f64,
    pub status: TradeStatus,
}

impl PnlOutcome {
    /// Outcome of a position that has not been realized yet
    pub fn running() -> Self {
        Self {
            pnl: 0.0,
            pnl_percent: 0.0,
            status: TradeStatus::Running,
        }
    }
}

/// Derive P&L, percent return and status from raw entry fields.
///
/// `entry_price` must already be validated as positive. An open trade
/// (`is_closed == false` or `exit_price == 0`) never reports realized P&L.
pub fn calculate_pnl(
    entry_price: f64,
    exit_price: f64,
    quantity: f64,
    direction: Direction,
    is_closed: bool,
) -> PnlOutcome {
    if !is_closed || exit_price == 0.0 {
        return PnlOutcome::running();
    }

    let sign = direction.sign();
    let price_move = exit_price - entry_price;
    let pnl = positive_zero(price_move * quantity * sign);
    let pnl_percent = round2((price_move / entry_price) * 100.0 * sign);

    PnlOutcome {
        pnl,
        pnl_percent,
        status: TradeStatus::from_pnl(pnl),
    }
}

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    positive_zero((value * 100.0).round() / 100.0)
}

// keeps -0.0 out of persisted data
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
