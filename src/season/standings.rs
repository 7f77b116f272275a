//! Standings: the canonical ranking of a roster.
//!
//! Cards are ordered by wins (descending), then rating (descending).
//! The sort is stable, so cards tied on both keys keep roster order.
//! Every ranked view in the league (home page, playoff seeding, history)
//! uses this ordering.

use serde::{Deserialize, Serialize};

use crate::cards::Roster;
use crate::history::BalanceDirection;
use crate::rating::{Grade, RatingModel};

/// One row of the standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    /// 1-based rank.
    pub rank: usize,
    pub name: String,
    /// Position of the card in the roster at the time of ranking.
    pub roster_position: usize,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
    pub rating: f64,
    pub grade: Grade,
    pub streak: i32,
    pub championships: u32,
    pub balance_direction: Option<BalanceDirection>,
}

/// Ranked view of a roster. Read-only; holds copies, not the cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsSnapshot {
    pub entries: Vec<StandingsEntry>,
}

impl StandingsSnapshot {
    /// Rank every card in the roster.
    #[must_use]
    pub fn from_roster(roster: &Roster, model: &RatingModel) -> Self {
        let mut entries: Vec<StandingsEntry> = roster
            .iter()
            .enumerate()
            .map(|(position, card)| {
                let rating = card.rating(model);
                StandingsEntry {
                    rank: 0,
                    name: card.name.clone(),
                    roster_position: position,
                    wins: card.wins,
                    losses: card.losses,
                    win_pct: card.win_pct(),
                    rating,
                    grade: model.grade(rating),
                    streak: card.streak,
                    championships: card.championships,
                    balance_direction: card.balance_direction,
                }
            })
            .collect();

        // `sort_by` is stable
        entries.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| b.rating.total_cmp(&a.rating)));

        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn leader(&self) -> Option<&StandingsEntry> {
        self.entries.first()
    }

    /// The top `n` entries (fewer if the roster is smaller).
    #[must_use]
    pub fn top(&self, n: usize) -> &[StandingsEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    #[must_use]
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.rank)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingsEntry> {
        self.entries.iter()
    }

    /// Roster positions in rank order.
    #[must_use]
    pub fn seed_positions(&self, n: usize) -> Vec<usize> {
        self.top(n).iter().map(|e| e.roster_position).collect()
    }
}

/// Rank a roster. Side-effect free.
#[must_use]
pub fn standings(roster: &Roster, model: &RatingModel) -> StandingsSnapshot {
    StandingsSnapshot::from_roster(roster, model)
}
