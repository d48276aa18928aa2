//! Derived views for the analytics page

use crate::journal::{AccountBalance, TradeRecord, TradeStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Realized P&L of one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairPnl {
    pub pair: String,
    pub pnl: f64,
    pub trades: usize,
}

/// Trade counts by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinLossBreakdown {
    pub wins: usize,
    pub losses: usize,
    pub break_even: usize,
    pub running: usize,
}

impl WinLossBreakdown {
    /// Number of realized trades
    pub fn closed(&self) -> usize {
        self.wins + self.losses + self.break_even
    }
}

/// One point on the equity curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: String,
    pub equity: f64,
}

/// Realized P&L per pair, best first. Ties are ordered by pair name.
pub fn pnl_by_pair(trades: &[TradeRecord]) -> Vec<PairPnl> {
    let mut by_pair: HashMap<&str, PairPnl> = HashMap::new();

    for trade in trades.iter().filter(|t| t.is_closed()) {
        let entry = by_pair.entry(trade.pair.as_str()).or_insert_with(|| PairPnl {
            pair: trade.pair.clone(),
            pnl: 0.0,
            trades: 0,
        });
        entry.pnl += trade.pnl;
        entry.trades += 1;
    }

    let mut rows: Vec<PairPnl> = by_pair.into_values().collect();
    rows.sort_by(|a, b| b.pnl.total_cmp(&a.pnl).then_with(|| a.pair.cmp(&b.pair)));
    rows
}

/// Count trades by status
pub fn win_loss_breakdown(trades: &[TradeRecord]) -> WinLossBreakdown {
    let mut breakdown = WinLossBreakdown::default();
    for trade in trades {
        match trade.status {
            TradeStatus::Win => breakdown.wins += 1,
            TradeStatus::Loss => breakdown.losses += 1,
            TradeStatus::BreakEven => breakdown.break_even += 1,
            TradeStatus::Running => breakdown.running += 1,
        }
    }
    breakdown
}

/// Cumulative equity from `balance`, oldest closed trade first.
///
/// `trades` is newest-first, as held by the store. The first point is the
/// starting balance labelled `"start"`.
pub fn equity_curve(balance: AccountBalance, trades: &[TradeRecord]) -> Vec<EquityPoint> {
    let mut equity = balance.value();
    let mut curve = vec![EquityPoint {
        date: "start".to_string(),
        equity,
    }];

    for trade in trades.iter().rev().filter(|t| t.is_closed()) {
        equity += trade.pnl;
        curve.push(EquityPoint {
            date: trade.opened_at.clone(),
            equity,
        });
    }

    curve
}

/// Largest peak-to-trough decline of the equity curve, in percent of the peak
pub fn max_drawdown_percent(curve: &[EquityPoint]) -> f64 {
    let mut max_drawdown = 0.0;
    let mut peak = f64::MIN;

    for point in curve {
        if point.equity > peak {
            peak = point.equity;
        }
        if peak > 0.0 {
            let drawdown = (peak - point.equity) / peak * 100.0;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    max_drawdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::sample_trades;

    #[test]
    fn test_pnl_by_pair_sorted() {
        let mut trades = sample_trades();
        let mut second_btc = trades[4].clone();
        second_btc.id = "t-6".to_string();
        second_btc.pnl = 250.0;
        trades.insert(0, second_btc);

        let rows = pnl_by_pair(&trades);
        let summary: Vec<_> = rows.iter().map(|r| (r.pair.as_str(), r.pnl, r.trades)).collect();
        assert_eq!(
            summary,
            vec![
                ("XAU/USD", 3000.0, 1),
                ("BTC/USDT", 1750.0, 2),
                ("ETH/USDT", 500.0, 1),
                ("EUR/USD", -150.0, 1),
                ("NVDA", -800.0, 1),
            ]
        );
    }

    #[test]
    fn test_breakdown_counts_running() {
        let mut trades = sample_trades();
        trades[0].status = TradeStatus::Running;
        let breakdown = win_loss_breakdown(&trades);
        assert_eq!(breakdown.wins, 2);
        assert_eq!(breakdown.losses, 2);
        assert_eq!(breakdown.running, 1);
        assert_eq!(breakdown.closed(), 4);
    }

    #[test]
    fn test_equity_curve_oldest_first() {
        let balance = AccountBalance::new(10_000.0).unwrap();
        let curve = equity_curve(balance, &sample_trades());
        let equities: Vec<_> = curve.iter().map(|p| p.equity).collect();
        assert_eq!(
            equities,
            vec![10_000.0, 11_500.0, 11_350.0, 14_350.0, 13_550.0, 14_050.0]
        );
        assert_eq!(curve[1].date, "2023-10-24 14:30");
    }

    #[test]
    fn test_max_drawdown() {
        let balance = AccountBalance::new(10_000.0).unwrap();
        let curve = equity_curve(balance, &sample_trades());
        // peak 14350 falls to 13550
        let expected = (14_350.0 - 13_550.0) / 14_350.0 * 100.0;
        assert!((max_drawdown_percent(&curve) - expected).abs() < 1e-9);
        assert_eq!(max_drawdown_percent(&curve[..2]), 0.0);
    }
}
