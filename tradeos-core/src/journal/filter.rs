//! Journal search

use crate::journal::{Direction, TradeRecord, TradeStatus};

/// Search criteria for the journal list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFilter {
    /// Case-insensitive substring matched against pair, notes and tags
    pub query: Option<String>,
    pub status: Option<TradeStatus>,
    pub direction: Option<Direction>,
    /// Exact tag the trade must carry
    pub tag: Option<String>,
}

impl TradeFilter {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn status(mut self, status: TradeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Whether `trade` satisfies every set criterion
    pub fn matches(&self, trade: &TradeRecord) -> bool {
        if self.status.is_some_and(|status| trade.status != status) {
            return false;
        }
        if self.direction.is_some_and(|direction| trade.direction != direction) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !trade.has_tag(tag) {
                return false;
            }
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                trade.pair.to_lowercase().contains(&needle)
                    || trade
                        .notes
                        .as_deref()
                        .is_some_and(|notes| notes.to_lowercase().contains(&needle))
                    || trade.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Trades matching `filter`, in collection order
pub fn filter_trades<'a>(trades: &'a [TradeRecord], filter: &TradeFilter) -> Vec<&'a TradeRecord> {
    trades.iter().filter(|t| filter.matches(t)).collect()
}
