//! Built-in sample journal used to seed an empty store

use crate::journal::{Direction, TradeRecord, TradeStatus};
use std::collections::BTreeSet;

/// Starting capital when none has been saved
pub const DEFAULT_ACCOUNT_BALANCE: f64 = 10_000.0;

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    pair: &str,
    direction: Direction,
    entry_price: f64,
    exit_price: f64,
    quantity: f64,
    pnl: f64,
    pnl_percent: f64,
    opened_at: &str,
    status: TradeStatus,
    ai_analysis: &str,
) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        pair: pair.to_string(),
        direction,
        entry_price,
        exit_price,
        quantity,
        pnl,
        pnl_percent,
        opened_at: opened_at.to_string(),
        status,
        tags: BTreeSet::new(),
        notes: None,
        screenshot_ref: None,
        ai_analysis: Some(ai_analysis.to_string()),
    }
}

/// Sample trades, newest first. Quantities are in base units, so each `pnl`
/// equals `(exit - entry) * quantity * sign`.
pub fn sample_trades() -> Vec<TradeRecord> {
    vec![
        sample(
            "t-5",
            "ETH/USDT",
            Direction::Short,
            2200.0,
            2150.0,
            10.0,
            500.0,
            2.27,
            "2023-10-27 15:45",
            TradeStatus::Win,
            "Clean breakdown retest.",
        ),
        sample(
            "t-4",
            "NVDA",
            Direction::Long,
            450.0,
            442.0,
            100.0,
            -800.0,
            -1.78,
            "2023-10-27 09:30",
            TradeStatus::Loss,
            "Entered into resistance. Momentum indicators were showing bearish divergence.",
        ),
        sample(
            "t-3",
            "XAU/USD",
            Direction::Long,
            1950.0,
            1980.0,
            100.0,
            3000.0,
            1.54,
            "2023-10-26 11:00",
            TradeStatus::Win,
            "Perfect execution of the Golden Pocket setup. Risk to Reward ratio was 1:4.",
        ),
        sample(
            "t-2",
            "EUR/USD",
            Direction::Short,
            1.0850,
            1.0865,
            100_000.0,
            -150.0,
            -0.14,
            "2023-10-25 09:15",
            TradeStatus::Loss,
            "Revenge Trading Detected: You entered this trade 5min after a previous loss on GBPJPY.",
        ),
        sample(
            "t-1",
            "BTC/USDT",
            Direction::Long,
            42000.0,
            43500.0,
            1.0,
            1500.0,
            3.57,
            "2023-10-24 14:30",
            TradeStatus::Win,
            "Great patience on the retest of the 42k support level. High volume confirmation observed.",
        ),
    ]
}
