//! Raw entry-form fields for a new trade

use crate::error::ValidationError;
use crate::journal::{calculate_pnl, Direction, TradeRecord, TradeValidator, OPENED_AT_FORMAT};
use chrono::{NaiveDateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Unvalidated fields for a new journal entry
#[derive(Debug, Clone, PartialEq)]
pub struct TradeDraft {
    pub pair: String,
    pub direction: Direction,
    pub entry_price: f64,
    /// `0.0` while the trade is open
    pub exit_price: f64,
    /// Defaults to 1 when unset
    pub quantity: Option<f64>,
    pub is_closed: bool,
    /// Defaults to the current time when unset
    pub opened_at: Option<NaiveDateTime>,
    pub tags: BTreeSet<String>,
    pub notes: Option<String>,
    pub screenshot_ref: Option<String>,
    pub ai_analysis: Option<String>,
}

impl TradeDraft {
    /// Start a draft for an open trade
    pub fn new(pair: impl Into<String>, direction: Direction, entry_price: f64) -> Self {
        Self {
            pair: pair.into(),
            direction,
            entry_price,
            exit_price: 0.0,
            quantity: None,
            is_closed: false,
            opened_at: None,
            tags: BTreeSet::new(),
            notes: None,
            screenshot_ref: None,
            ai_analysis: None,
        }
    }

    /// Mark the trade closed at `exit_price`
    pub fn closed_at(mut self, exit_price: f64) -> Self {
        self.exit_price = exit_price;
        self.is_closed = true;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_opened_at(mut self, opened_at: NaiveDateTime) -> Self {
        self.opened_at = Some(opened_at);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_screenshot(mut self, screenshot_ref: impl Into<String>) -> Self {
        self.screenshot_ref = Some(screenshot_ref.into());
        self
    }

    pub fn with_ai_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.ai_analysis = Some(analysis.into());
        self
    }

    /// Validate the draft and derive the finished record with a fresh id
    pub fn into_record(self) -> Result<TradeRecord, ValidationError> {
        let quantity = self.quantity.unwrap_or(1.0);
        TradeValidator::validate_prices(self.entry_price, self.exit_price, quantity)?;

        let outcome = calculate_pnl(
            self.entry_price,
            self.exit_price,
            quantity,
            self.direction,
            self.is_closed,
        );
        let opened_at = self
            .opened_at
            .unwrap_or_else(|| Utc::now().naive_utc())
            .format(OPENED_AT_FORMAT)
            .to_string();

        Ok(TradeRecord {
            id: Uuid::new_v4().to_string(),
            pair: self.pair,
            direction: self.direction,
            entry_price: self.entry_price,
            // an unrealized exit is not recorded
            exit_price: if outcome.status.is_closed() { self.exit_price } else { 0.0 },
            quantity,
            pnl: outcome.pnl,
            pnl_percent: outcome.pnl_percent,
            opened_at,
            status: outcome.status,
            tags: self.tags,
            notes: self.notes,
            screenshot_ref: self.screenshot_ref,
            ai_analysis: self.ai_analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::TradeStatus;
    use chrono::NaiveDate;

    #[test]
    fn test_closed_draft_into_record() {
        let opened_at = NaiveDate::from_ymd_opt(2023, 10, 24)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let record = TradeDraft::new("BTC/USDT", Direction::Long, 42000.0)
            .closed_at(43500.0)
            .with_opened_at(opened_at)
            .with_tag("retest")
            .with_notes("Waited for the 42k retest")
            .into_record()
            .unwrap();

        assert!(!record.id.is_empty());
        assert_eq!(record.quantity, 1.0);
        assert_eq!(record.pnl, 1500.0);
        assert_eq!(record.pnl_percent, 3.57);
        assert_eq!(record.status, TradeStatus::Win);
        assert_eq!(record.opened_at, "2023-10-24 14:30");
        assert!(record.has_tag("retest"));
    }

    #[test]
    fn test_open_draft_drops_exit_price() {
        let mut draft = TradeDraft::new("NVDA", Direction::Long, 450.0).with_quantity(10.0);
        draft.exit_price = 460.0;

        let record = draft.into_record().unwrap();
        assert_eq!(record.status, TradeStatus::Running);
        assert_eq!(record.exit_price, 0.0);
        assert_eq!(record.pnl, 0.0);
    }

    #[test]
    fn test_rejects_zero_entry_price() {
        let result = TradeDraft::new("ETH/USDT", Direction::Short, 0.0)
            .closed_at(2150.0)
            .into_record();
        assert_eq!(result, Err(ValidationError::NonPositiveEntryPrice(0.0)));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TradeDraft::new("XAU/USD", Direction::Long, 1950.0).into_record().unwrap();
        let b = TradeDraft::new("XAU/USD", Direction::Long, 1950.0).into_record().unwrap();
        assert_ne!(a.id, b.id);
    }
}
