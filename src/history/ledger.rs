//! The history ledger: append-only league records.
//!
//! Uses `im` persistent vectors so snapshots of the ledger clone in O(1).
//!
//! The ledger only grows, with two exceptions:
//! - playoff results are attached once to their season's record
//! - `purge_card` drops a retired card's own series when the league
//!   retires cards with `RetirementPolicy::PurgeHistory`

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::records::{BalanceChangeRecord, PerformancePoint, SeasonRecord};
use crate::bracket::BracketResults;
use crate::core::{LeagueError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryLedger {
    seasons: Vector<SeasonRecord>,
    balance_changes: Vector<BalanceChangeRecord>,
    performance: FxHashMap<String, Vec<PerformancePoint>>,
}

impl HistoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a season record. Season numbers must strictly increase.
    pub fn record_season(&mut self, record: SeasonRecord) -> Result<()> {
        if let Some(last) = self.seasons.last() {
            if record.season_number <= last.season_number {
                return Err(LeagueError::SeasonAlreadyRecorded {
                    season: record.season_number,
                });
            }
        }
        self.seasons.push_back(record);
        Ok(())
    }

    /// Attach playoff results to an already recorded season.
    pub fn attach_playoffs(&mut self, season_number: u32, results: BracketResults) -> Result<()> {
        let position = self
            .seasons
            .iter()
            .position(|s| s.season_number == season_number)
            .ok_or(LeagueError::SeasonNotFound { season: season_number })?;

        let mut record = self.seasons[position].clone();
        if record.playoffs.is_some() {
            return Err(LeagueError::PlayoffsAlreadyCompleted { season: season_number });
        }
        record.playoffs = Some(results);
        self.seasons.set(position, record);
        Ok(())
    }

    pub fn record_balance_change(&mut self, record: BalanceChangeRecord) {
        self.balance_changes.push_back(record);
    }

    pub fn record_performance(&mut self, card: &str, point: PerformancePoint) {
        self.performance.entry(card.to_string()).or_default().push(point);
    }

    pub fn seasons(&self) -> impl Iterator<Item = &SeasonRecord> {
        self.seasons.iter()
    }

    #[must_use]
    pub fn season(&self, season_number: u32) -> Option<&SeasonRecord> {
        self.seasons.iter().find(|s| s.season_number == season_number)
    }

    #[must_use]
    pub fn latest_season(&self) -> Option<&SeasonRecord> {
        self.seasons.last()
    }

    #[must_use]
    pub fn season_count(&self) -> usize {
        self.seasons.len()
    }

    pub fn balance_changes(&self) -> impl Iterator<Item = &BalanceChangeRecord> {
        self.balance_changes.iter()
    }

    #[must_use]
    pub fn balance_change_count(&self) -> usize {
        self.balance_changes.len()
    }

    /// Distinct cards edited during a season.
    #[must_use]
    pub fn cards_rebalanced_in(&self, season_number: u32) -> FxHashSet<&str> {
        self.balance_changes
            .iter()
            .filter(|r| r.season_number == season_number)
            .map(|r| r.card.as_str())
            .collect()
    }

    /// A card's per-season finishes, oldest first.
    #[must_use]
    pub fn performance(&self, card: &str) -> &[PerformancePoint] {
        self.performance.get(card).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop a card's performance series and balance records.
    ///
    /// Season records stay: they are league history, not the card's.
    pub fn purge_card(&mut self, card: &str) {
        self.performance.remove(card);
        self.balance_changes.retain(|r| r.card != card);
    }

    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<()> {
        for pair in self.seasons.iter().zip(self.seasons.iter().skip(1)) {
            if pair.1.season_number <= pair.0.season_number {
                return Err(LeagueError::InvalidSnapshot(format!(
                    "season records out of order: {} then {}",
                    pair.0.season_number, pair.1.season_number
                )));
            }
        }
        if self.seasons.iter().any(|s| s.season_number == 0) {
            return Err(LeagueError::InvalidSnapshot("season numbers start at 1".into()));
        }
        Ok(())
    }
}
