//! Trade records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Timestamp layout used for `opened_at`
pub const OPENED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One journal entry: a closed or still running position.
///
/// Field names follow the JSON layout persisted under the `trades` key;
/// the aliases let journals written by the browser dashboard load as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Opaque unique id
    pub id: String,
    /// Instrument symbol (e.g., "BTC/USDT")
    pub pair: String,
    /// Trade direction
    #[serde(alias = "type")]
    pub direction: Direction,
    /// Entry price
    pub entry_price: f64,
    /// Exit price, `0.0` while the trade is open
    #[serde(default)]
    pub exit_price: f64,
    /// Position size in units of the base instrument
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    /// Realized P&L in quote currency
    #[serde(default)]
    pub pnl: f64,
    /// Realized return relative to entry price, in percent
    #[serde(default)]
    pub pnl_percent: f64,
    /// When the trade was opened, `YYYY-MM-DD HH:MM`
    #[serde(alias = "date")]
    pub opened_at: String,
    pub status: TradeStatus,
    /// Setup and emotion annotations
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, alias = "screenshotUrl", skip_serializing_if = "Option::is_none")]
    pub screenshot_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

fn default_quantity() -> f64 {
    1.0
}

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Profits when price rises
    Long,
    /// Profits when price falls
    Short,
}

impl Direction {
    /// `+1.0` for long, `-1.0` for short
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "LONG"),
            Direction::Short => write!(f, "SHORT"),
        }
    }
}

/// Trade outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeStatus {
    #[serde(rename = "WIN")]
    Win,
    #[serde(rename = "LOSS")]
    Loss,
    #[serde(rename = "BE", alias = "BREAK_EVEN")]
    BreakEven,
    /// Position still open
    #[serde(rename = "RUNNING")]
    Running,
}

impl TradeStatus {
    /// Whether the trade has been realized
    pub fn is_closed(&self) -> bool {
        !matches!(self, TradeStatus::Running)
    }

    /// Outcome implied by a realized P&L
    pub fn from_pnl(pnl: f64) -> Self {
        if pnl > 0.0 {
            TradeStatus::Win
        } else if pnl < 0.0 {
            TradeStatus::Loss
        } else {
            TradeStatus::BreakEven
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TradeStatus::Win => "WIN",
            TradeStatus::Loss => "LOSS",
            TradeStatus::BreakEven => "BE",
            TradeStatus::Running => "RUNNING",
        };
        write!(f, "{}", label)
    }
}

impl TradeRecord {
    /// Whether the trade has been realized
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Entry notional
    pub fn entry_value(&self) -> f64 {
        self.entry_price * self.quantity
    }

    /// Whether the record carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Attach a tag
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }
}
