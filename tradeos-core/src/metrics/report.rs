//! Performance report generation

use crate::journal::{AccountBalance, TradeRecord};
use crate::metrics::{
    equity_curve, max_drawdown_percent, win_loss_breakdown, Metrics, MetricsCalculator,
    WinLossBreakdown,
};

/// Performance summary of a journal
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    metrics: Metrics,
    breakdown: WinLossBreakdown,
    gross_profit: f64,
    gross_loss: f64,
    expectancy: f64,
    start_balance: f64,
    end_balance: f64,
    max_drawdown: f64,
}

impl PerformanceReport {
    /// Build a report from the journal and its starting balance
    pub fn new(trades: &[TradeRecord], balance: AccountBalance) -> Self {
        let metrics = MetricsCalculator::calculate(trades);
        let closed = MetricsCalculator::closed_trades(trades);
        let curve = equity_curve(balance, trades);

        Self {
            metrics,
            breakdown: win_loss_breakdown(trades),
            gross_profit: MetricsCalculator::gross_profit(&closed),
            gross_loss: MetricsCalculator::gross_loss(&closed),
            expectancy: MetricsCalculator::expectancy(&closed),
            start_balance: balance.value(),
            end_balance: balance.after(metrics.total_pnl),
            max_drawdown: max_drawdown_percent(&curve),
        }
    }

    /// Format report as string
    pub fn format(&self) -> String {
        let growth = AccountBalance::new(self.start_balance)
            .map(|b| b.growth_percent(self.end_balance))
            .unwrap_or(0.0);

        format!(
            r#"
Journal Performance
===================
Starting Balance: ${:.2}
Current Balance: ${:.2}
Net P&L: ${:.2} ({:.2}%)
Closed Trades: {}
Running Trades: {}
Wins / Losses / Break-even: {} / {} / {}
Win Rate: {}%
Gross Profit: ${:.2}
Gross Loss: ${:.2}
Profit Factor: {:.2}
Expectancy: ${:.2}
Maximum Drawdown: {:.2}%
Active Win Streak: {}
"#,
            self.start_balance,
            self.end_balance,
            self.metrics.total_pnl,
            growth,
            self.breakdown.closed(),
            self.breakdown.running,
            self.breakdown.wins,
            self.breakdown.losses,
            self.breakdown.break_even,
            self.metrics.win_rate,
            self.gross_profit,
            self.gross_loss,
            self.metrics.profit_factor,
            self.expectancy,
            self.max_drawdown,
            self.metrics.active_streak,
        )
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn breakdown(&self) -> &WinLossBreakdown {
        &self.breakdown
    }

    pub fn gross_profit(&self) -> f64 {
        self.gross_profit
    }

    pub fn gross_loss(&self) -> f64 {
        self.gross_loss
    }

    pub fn end_balance(&self) -> f64 {
        self.end_balance
    }
}
