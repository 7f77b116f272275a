//! Cards - the competing units of a league.
//!
//! A `Card` pairs immutable-by-default attributes with the running record
//! the simulation mutates: wins, losses, streak, championships and the grade
//! it finished each season with.
//!
//! Rating and grade are computed on demand from the current attributes and
//! never stored, so a balance change can't leave a stale rating behind.

use serde::{Deserialize, Serialize};

use super::attributes::{AttackCategory, AttributeDelta, CardAttributes, MobilityTier};
use super::generation::GenerationConfig;
use crate::core::{LeagueRng, Result};
use crate::history::BalanceDirection;
use crate::rating::{Grade, RatingModel};

/// A card with its attributes and running record.
///
/// ## Streak
///
/// `streak` is signed: `+3` means three straight wins, `-2` two straight
/// losses. A win after a losing run resets it to `+1` and vice versa.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Unique name within a roster.
    pub name: String,

    attributes: CardAttributes,

    pub wins: u32,
    pub losses: u32,
    pub streak: i32,

    /// Playoff titles won.
    pub championships: u32,

    /// Grade at each season rollover, oldest first.
    pub grade_history: Vec<Grade>,

    /// Label of this season's balance change, if any.
    pub balance_direction: Option<BalanceDirection>,
}

impl Card {
    /// Create a card with a clean record.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: CardAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            wins: 0,
            losses: 0,
            streak: 0,
            championships: 0,
            grade_history: Vec::new(),
            balance_direction: None,
        }
    }

    /// Create a card with attributes drawn from the generation ranges.
    pub fn generate(name: impl Into<String>, config: &GenerationConfig, rng: &mut LeagueRng) -> Self {
        Self::new(name, config.sample(rng))
    }

    #[must_use]
    pub fn attributes(&self) -> &CardAttributes {
        &self.attributes
    }

    /// Rating in `[0, 100]` under the given model.
    #[must_use]
    pub fn rating(&self, model: &RatingModel) -> f64 {
        model.rating(&self.attributes)
    }

    #[must_use]
    pub fn grade(&self, model: &RatingModel) -> Grade {
        model.grade_for(&self.attributes)
    }

    /// Games played since the record was last reset.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win fraction, `0.0` before any game.
    #[must_use]
    pub fn win_pct(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(games)
        }
    }

    /// Record one contest result.
    pub fn record_result(&mut self, won: bool) {
        if won {
            self.wins += 1;
            self.streak = (self.streak + 1).max(1);
        } else {
            self.losses += 1;
            self.streak = (self.streak - 1).min(-1);
        }
    }

    /// Clear wins and losses, keeping the streak.
    pub fn reset_record(&mut self) {
        self.wins = 0;
        self.losses = 0;
    }

    /// Overwrite attributes after validating them.
    ///
    /// Nothing changes if validation fails. Returns the per-field delta,
    /// empty when `new_attributes` equals the current ones.
    pub fn apply_attribute_changes(&mut self, new_attributes: CardAttributes) -> Result<AttributeDelta> {
        new_attributes.validate(&self.name)?;
        let delta = self.attributes.diff(&new_attributes);
        if !delta.is_empty() {
            self.attributes = new_attributes;
        }
        Ok(delta)
    }

    #[must_use]
    pub fn attack_category(&self) -> AttackCategory {
        self.attributes.attack_category
    }

    #[must_use]
    pub fn mobility(&self) -> MobilityTier {
        self.attributes.mobility
    }
}
