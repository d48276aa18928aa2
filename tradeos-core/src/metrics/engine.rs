//! Performance metrics over the trade journal

use crate::journal::{round2, TradeRecord, TradeStatus};
use serde::{Deserialize, Serialize};

/// Headline metrics shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Winning share of closed trades, whole percent
    pub win_rate: u32,
    /// Gross profit over gross loss, two decimals
    pub profit_factor: f64,
    /// Realized P&L across closed trades
    pub total_pnl: f64,
    /// Consecutive wins among the most recent closed trades
    pub active_streak: u32,
}

/// Stateless metric calculations. Running trades are excluded from every
/// figure; each call recomputes from the given trades.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Compute all headline metrics
    pub fn calculate(trades: &[TradeRecord]) -> Metrics {
        let closed = Self::closed_trades(trades);
        if closed.is_empty() {
            return Metrics::default();
        }

        Metrics {
            win_rate: Self::win_rate(&closed),
            profit_factor: Self::profit_factor(&closed),
            total_pnl: Self::total_pnl(&closed),
            active_streak: Self::active_streak(&closed),
        }
    }

    /// Closed trades in collection order
    pub fn closed_trades(trades: &[TradeRecord]) -> Vec<&TradeRecord> {
        trades.iter().filter(|t| t.is_closed()).collect()
    }

    /// Winning share in whole percent, halves rounded up
    pub fn win_rate(closed: &[&TradeRecord]) -> u32 {
        if closed.is_empty() {
            return 0;
        }
        let wins = closed.iter().filter(|t| t.status == TradeStatus::Win).count();
        ((wins as f64 / closed.len() as f64) * 100.0).round() as u32
    }

    /// Sum of positive P&L
    pub fn gross_profit(closed: &[&TradeRecord]) -> f64 {
        closed.iter().map(|t| t.pnl).filter(|pnl| *pnl > 0.0).sum()
    }

    /// Absolute sum of negative P&L
    pub fn gross_loss(closed: &[&TradeRecord]) -> f64 {
        closed
            .iter()
            .map(|t| t.pnl)
            .filter(|pnl| *pnl < 0.0)
            .sum::<f64>()
            .abs()
    }

    /// Gross profit over gross loss. Without losses this degenerates to the
    /// gross profit itself.
    pub fn profit_factor(closed: &[&TradeRecord]) -> f64 {
        let gross_profit = Self::gross_profit(closed);
        let gross_loss = Self::gross_loss(closed);

        if gross_loss == 0.0 {
            return gross_profit;
        }
        round2(gross_profit / gross_loss)
    }

    /// Signed sum of realized P&L
    pub fn total_pnl(closed: &[&TradeRecord]) -> f64 {
        closed.iter().map(|t| t.pnl).sum()
    }

    /// Leading run of wins; `closed` is newest-first
    pub fn active_streak(closed: &[&TradeRecord]) -> u32 {
        closed
            .iter()
            .take_while(|t| t.status == TradeStatus::Win)
            .count() as u32
    }

    /// Average P&L per closed trade
    pub fn expectancy(closed: &[&TradeRecord]) -> f64 {
        if closed.is_empty() {
            return 0.0;
        }
        Self::total_pnl(closed) / closed.len() as f64
    }
}
