//! League history: season results, balance changes and per-card finishes.

pub mod ledger;
pub mod records;

pub use ledger::HistoryLedger;
pub use records::{BalanceChangeRecord, BalanceDirection, PerformancePoint, SeasonRecord};
