//! Trade store
//!
//! [`TradeStore`] is the only owner of the journal: the newest-first trade
//! list and the account balance. It is constructed explicitly around a
//! [`KeyValueStore`] backend and writes each mutated slice through to it
//! immediately. A failed write is logged and the in-memory state stays
//! authoritative for the rest of the session.

pub mod settings;

pub use settings::*;

use crate::error::{StorageError, ValidationError};
use crate::journal::{
    filter_trades, sample_trades, AccountBalance, TradeDraft, TradeFilter, TradeRecord,
    TradeValidator,
};
use crate::metrics::{Metrics, MetricsCalculator, PerformanceReport};
use crate::storage::{open_backend, KeyValueStore};
use shared::Config;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Owner of the trade journal and account balance
pub struct TradeStore<S: KeyValueStore> {
    backend: S,
    settings: StoreSettings,
    trades: Vec<TradeRecord>,
    balance: AccountBalance,
}

impl<S: KeyValueStore> TradeStore<S> {
    /// Load the journal from `backend`.
    ///
    /// A missing trade list seeds the built-in sample trades; an unreadable
    /// one falls back to them. A missing or invalid balance falls back to
    /// the configured default. Never fails and never writes.
    pub fn initialize(backend: S, settings: StoreSettings) -> Self {
        let trades = Self::load_trades(&backend, &settings);
        let balance = Self::load_balance(&backend, &settings);

        info!(
            backend = backend.name(),
            trades = trades.len(),
            balance = balance.value(),
            "Trade store initialized"
        );

        Self {
            backend,
            settings,
            trades,
            balance,
        }
    }

    fn load_trades(backend: &S, settings: &StoreSettings) -> Vec<TradeRecord> {
        let key = settings.trades_key();
        let raw = match backend.get(&key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!("No saved trades under {}, seeding sample journal", key);
                return sample_trades();
            }
            Err(e) => {
                warn!("Failed to read {}: {}; using sample journal", key, e);
                return sample_trades();
            }
        };

        match serde_json::from_str::<Vec<TradeRecord>>(&raw) {
            Ok(trades) => trades,
            Err(e) => {
                warn!("Saved trades under {} are malformed: {}; using sample journal", key, e);
                sample_trades()
            }
        }
    }

    fn load_balance(backend: &S, settings: &StoreSettings) -> AccountBalance {
        let key = settings.balance_key();
        let fallback = AccountBalance::new(settings.default_balance).unwrap_or_else(|e| {
            warn!("Configured default balance rejected: {}", e);
            AccountBalance::default()
        });

        match backend.get(&key) {
            Ok(Some(raw)) => raw.parse::<AccountBalance>().unwrap_or_else(|e| {
                warn!("Saved balance under {} is invalid: {}; using default", key, e);
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                warn!("Failed to read {}: {}; using default balance", key, e);
                fallback
            }
        }
    }

    /// All trades, newest first
    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    /// Find a trade by id
    pub fn get_trade(&self, id: &str) -> Option<&TradeRecord> {
        self.trades.iter().find(|t| t.id == id)
    }

    pub fn account_balance(&self) -> AccountBalance {
        self.balance
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Headline metrics, recomputed on every call
    pub fn metrics(&self) -> Metrics {
        MetricsCalculator::calculate(&self.trades)
    }

    /// Full performance report against the account balance
    pub fn report(&self) -> PerformanceReport {
        PerformanceReport::new(&self.trades, self.balance)
    }

    /// Trades matching `filter`, newest first
    pub fn search(&self, filter: &TradeFilter) -> Vec<&TradeRecord> {
        filter_trades(&self.trades, filter)
    }

    /// Insert a finished record at the head of the journal.
    ///
    /// An empty `id` is replaced with a generated one. Invalid prices, a
    /// status that disagrees with the P&L, a non-finite P&L or a duplicate id
    /// reject the record without touching the journal or the backend.
    pub fn add_trade(&mut self, mut record: TradeRecord) -> Result<&TradeRecord, ValidationError> {
        TradeValidator::validate_record(&record)?;

        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        } else if self.get_trade(&record.id).is_some() {
            return Err(ValidationError::DuplicateId(record.id));
        }

        debug!(id = %record.id, pair = %record.pair, status = %record.status, "Adding trade");
        self.trades.insert(0, record);
        self.persist_trades();

        Ok(&self.trades[0])
    }

    /// Build a record from entry-form fields and add it
    pub fn record_trade(&mut self, draft: TradeDraft) -> Result<&TradeRecord, ValidationError> {
        let record = draft.into_record()?;
        self.add_trade(record)
    }

    /// Remove the trade with `id`. Returns whether a trade was removed; an
    /// unknown id changes nothing and writes nothing.
    pub fn delete_trade(&mut self, id: &str) -> bool {
        let before = self.trades.len();
        self.trades.retain(|t| t.id != id);

        if self.trades.len() == before {
            debug!("No trade with id {} to delete", id);
            return false;
        }

        debug!("Deleted trade {}", id);
        self.persist_trades();
        true
    }

    /// Replace the account balance. Negative and non-finite values are
    /// rejected without a write.
    pub fn set_account_balance(&mut self, value: f64) -> Result<(), ValidationError> {
        self.balance = AccountBalance::new(value)?;
        debug!("Account balance set to {}", self.balance);
        self.persist_balance();
        Ok(())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Tear the store down and hand the backend back
    pub fn shutdown(self) -> S {
        info!(
            backend = self.backend.name(),
            trades = self.trades.len(),
            "Trade store shut down"
        );
        self.backend
    }

    fn persist_trades(&mut self) {
        let key = self.settings.trades_key();
        let result = serde_json::to_string(&self.trades)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set(&key, &json));

        if let Err(e) = result {
            warn!("Failed to persist trades under {}: {}", key, e);
        }
    }

    fn persist_balance(&mut self) {
        let key = self.settings.balance_key();
        if let Err(e) = self.backend.set(&key, &self.balance.to_string()) {
            warn!("Failed to persist balance under {}: {}", key, e);
        }
    }
}

impl TradeStore<Box<dyn KeyValueStore>> {
    /// Open the configured backend and initialize a store on it
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let backend = open_backend(config)?;
        Ok(Self::initialize(backend, StoreSettings::from_config(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{Direction, TradeStatus};
    use crate::storage::MemoryStore;

    /// Backend whose reads and writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    fn empty_store() -> TradeStore<MemoryStore> {
        let settings = StoreSettings::default();
        let backend = MemoryStore::with_values([(settings.trades_key(), "[]")]);
        TradeStore::initialize(backend, settings)
    }

    #[test]
    fn test_seeds_sample_journal_without_writing() {
        let store = TradeStore::initialize(MemoryStore::new(), StoreSettings::default());
        assert_eq!(store.trades(), sample_trades().as_slice());
        assert_eq!(store.account_balance().value(), 10_000.0);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_malformed_trades_fall_back_to_samples() {
        let settings = StoreSettings::default();
        let backend = MemoryStore::with_values([
            (settings.trades_key(), "{not json"),
            (settings.balance_key(), "abc"),
        ]);
        let store = TradeStore::initialize(backend, settings);
        assert_eq!(store.trades().len(), sample_trades().len());
        assert_eq!(store.account_balance().value(), 10_000.0);
    }

    #[test]
    fn test_saved_empty_journal_stays_empty() {
        let store = empty_store();
        assert!(store.trades().is_empty());
        assert_eq!(store.metrics(), Metrics::default());
    }

    #[test]
    fn test_add_trade_prepends_and_persists() {
        let mut store = empty_store();
        let first = store
            .record_trade(TradeDraft::new("BTC/USDT", Direction::Long, 42000.0).closed_at(43500.0))
            .unwrap()
            .id
            .clone();
        let second = store
            .record_trade(TradeDraft::new("NVDA", Direction::Long, 450.0))
            .unwrap()
            .id
            .clone();

        let ids: Vec<_> = store.trades().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(store.backend().write_count(), 2);

        let saved = store.backend().get("tradeos_trades").unwrap().unwrap();
        let saved: Vec<TradeRecord> = serde_json::from_str(&saved).unwrap();
        assert_eq!(saved, store.trades());
    }

    #[test]
    fn test_zero_entry_price_is_rejected_without_write() {
        let mut store = empty_store();
        let result = store.record_trade(TradeDraft::new("EUR/USD", Direction::Short, 0.0).closed_at(1.0865));
        assert_eq!(result.unwrap_err(), ValidationError::NonPositiveEntryPrice(0.0));

        let mut record = sample_trades().remove(0);
        record.entry_price = 0.0;
        assert!(store.add_trade(record).is_err());

        assert!(store.trades().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_inconsistent_outcome_is_rejected_without_write() {
        let closed = || {
            let mut record = sample_trades().remove(0);
            record.id = String::new();
            record
        };

        let mut open_with_win = closed();
        open_with_win.exit_price = 0.0;
        open_with_win.pnl = -500.0;

        let mut open_with_pnl = closed();
        open_with_pnl.exit_price = 0.0;
        open_with_pnl.status = TradeStatus::Running;

        let mut closed_but_running = closed();
        closed_but_running.status = TradeStatus::Running;

        let mut win_marked_loss = closed();
        win_marked_loss.status = TradeStatus::Loss;

        let mut loss_marked_win = closed();
        loss_marked_win.pnl = -500.0;
        loss_marked_win.pnl_percent = -2.27;

        let mut flat_marked_win = closed();
        flat_marked_win.pnl = 0.0;
        flat_marked_win.pnl_percent = 0.0;

        let mut store = empty_store();
        for record in [
            open_with_win,
            open_with_pnl,
            closed_but_running,
            win_marked_loss,
            loss_marked_win,
            flat_marked_win,
        ] {
            assert!(matches!(
                store.add_trade(record),
                Err(ValidationError::InconsistentStatus { .. })
            ));
        }

        assert!(store.trades().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_non_finite_pnl_cannot_corrupt_saved_journal() {
        let mut store = empty_store();
        let id = store
            .record_trade(TradeDraft::new("BTC/USDT", Direction::Long, 42000.0).closed_at(43500.0))
            .unwrap()
            .id
            .clone();

        let mut nan_pnl = sample_trades().remove(0);
        nan_pnl.id = String::new();
        nan_pnl.pnl = f64::NAN;
        assert!(matches!(
            store.add_trade(nan_pnl),
            Err(ValidationError::NonFinitePnl { .. })
        ));
        assert_eq!(store.backend().write_count(), 1);

        let reloaded = TradeStore::initialize(store.shutdown(), StoreSettings::default());
        assert_eq!(reloaded.trades().len(), 1);
        assert_eq!(reloaded.trades()[0].id, id);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut store = TradeStore::initialize(MemoryStore::new(), StoreSettings::default());
        let duplicate = sample_trades().remove(0);
        assert_eq!(
            store.add_trade(duplicate).unwrap_err(),
            ValidationError::DuplicateId("t-5".to_string())
        );
        assert_eq!(store.trades().len(), 5);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_empty_id_is_generated() {
        let mut store = empty_store();
        let mut record = sample_trades().remove(0);
        record.id = String::new();
        let added = store.add_trade(record).unwrap();
        assert!(!added.id.is_empty());
        assert_eq!(added.status, TradeStatus::Win);
    }

    #[test]
    fn test_delete_trade() {
        let mut store = TradeStore::initialize(MemoryStore::new(), StoreSettings::default());
        assert!(store.delete_trade("t-3"));
        assert!(store.get_trade("t-3").is_none());
        assert_eq!(store.trades().len(), 4);
        assert_eq!(store.backend().write_count(), 1);

        assert!(!store.delete_trade("t-3"));
        assert!(!store.delete_trade("missing"));
        assert_eq!(store.trades().len(), 4);
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_set_account_balance() {
        let mut store = empty_store();
        store.set_account_balance(25_000.5).unwrap();
        assert_eq!(store.account_balance().value(), 25_000.5);
        assert_eq!(store.backend().get("tradeos_balance").unwrap().as_deref(), Some("25000.5"));
        assert_eq!(store.backend().write_count(), 1);

        assert!(store.set_account_balance(-1.0).is_err());
        assert!(store.set_account_balance(f64::NAN).is_err());
        assert!(store.set_account_balance(f64::INFINITY).is_err());
        assert_eq!(store.account_balance().value(), 25_000.5);
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_broken_backend_keeps_memory_authoritative() {
        let mut store = TradeStore::initialize(BrokenStore, StoreSettings::default());
        assert_eq!(store.trades().len(), 5);

        store
            .record_trade(TradeDraft::new("SOL/USDT", Direction::Long, 20.0).closed_at(25.0))
            .unwrap();
        assert!(store.delete_trade("t-1"));
        store.set_account_balance(500.0).unwrap();

        assert_eq!(store.trades().len(), 5);
        assert_eq!(store.trades()[0].pair, "SOL/USDT");
        assert_eq!(store.account_balance().value(), 500.0);
    }

    #[test]
    fn test_shutdown_returns_backend() {
        let mut store = empty_store();
        store.set_account_balance(1.0).unwrap();
        let backend = store.shutdown();
        assert_eq!(backend.get("tradeos_balance").unwrap().as_deref(), Some("1"));
    }
}
