//! Ledger record types.

use serde::{Deserialize, Serialize};

use crate::bracket::BracketResults;
use crate::cards::{AttributeDelta, CardAttributes};

/// Label of a balance change, judged by the net rating change.
///
/// Individual stats may move in opposite directions; only the resulting
/// rating decides whether the card got stronger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceDirection {
    Buff,
    Nerf,
    /// Stats changed but the rating did not.
    Neutral,
}

impl BalanceDirection {
    #[must_use]
    pub fn from_rating_delta(delta: f64) -> Self {
        if delta > 0.0 {
            BalanceDirection::Buff
        } else if delta < 0.0 {
            BalanceDirection::Nerf
        } else {
            BalanceDirection::Neutral
        }
    }

    /// Short label ("B" / "N" / "=").
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            BalanceDirection::Buff => "B",
            BalanceDirection::Nerf => "N",
            BalanceDirection::Neutral => "=",
        }
    }
}

/// One simulated season.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonRecord {
    pub season_number: u32,
    /// Regular-season leader (rank 1 in the standings).
    pub champion: String,
    pub champion_wins: u32,
    pub champion_losses: u32,
    pub champion_rating: f64,
    /// Contests played over the season.
    pub games_played: u32,
    /// Playoff results, once the bracket has been run.
    pub playoffs: Option<BracketResults>,
}

impl SeasonRecord {
    /// The champion's record as "W-L".
    #[must_use]
    pub fn champion_record(&self) -> String {
        format!("{}-{}", self.champion_wins, self.champion_losses)
    }
}

/// One attribute edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BalanceChangeRecord {
    pub season_number: u32,
    pub card: String,
    pub before: CardAttributes,
    pub after: CardAttributes,
    pub changes: AttributeDelta,
    pub rating_delta: f64,
    pub direction: BalanceDirection,
}

/// A card's finish in one season.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerformancePoint {
    pub season_number: u32,
    pub wins: u32,
    pub losses: u32,
    pub rating: f64,
}
