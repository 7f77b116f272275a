//! League configuration.
//!
//! `LeagueConfig` gathers every tunable of the engine:
//! - season length and playoff format
//! - the rating model (weights, normalization, grade thresholds)
//! - contest noise
//! - card generation ranges
//! - bye, retirement and balance-change policies
//!
//! Configs can be built in code with the `with_*` methods or parsed from
//! TOML, where any omitted field keeps its default.

use serde::{Deserialize, Serialize};

use super::error::{LeagueError, Result};
use crate::bracket::{validate_series_lengths, ByePolicy};
use crate::cards::GenerationConfig;
use crate::contest::ContestConfig;
use crate::rating::RatingModel;

/// What happens to a retired card's history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetirementPolicy {
    /// Keep its performance series and balance records for audit.
    #[default]
    RetainHistory,
    /// Drop its performance series and balance records.
    PurgeHistory,
}

/// Complete league configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Contests each card initiates per season.
    pub games_per_entity: u32,

    /// Cards taken from the top of the standings into the playoffs.
    pub playoff_field_size: usize,

    /// Best-of-N per playoff round, first round first. Each N must be odd.
    pub round_series_lengths: Vec<u32>,

    pub rating: RatingModel,
    pub contest: ContestConfig,
    pub generation: GenerationConfig,

    pub bye_policy: ByePolicy,
    pub retirement_policy: RetirementPolicy,

    /// Distinct cards that may be rebalanced per season (`None` = unlimited).
    pub max_balance_changes_per_season: Option<usize>,

    /// Size of the all-league team.
    pub awards_team_size: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            games_per_entity: 82,
            playoff_field_size: 32,
            round_series_lengths: vec![1, 1, 3, 3, 5],
            rating: RatingModel::default(),
            contest: ContestConfig::default(),
            generation: GenerationConfig::default(),
            bye_policy: ByePolicy::Reject,
            retirement_policy: RetirementPolicy::RetainHistory,
            max_balance_changes_per_season: Some(11),
            awards_team_size: 10,
        }
    }
}

impl LeagueConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_games_per_entity(mut self, games: u32) -> Self {
        self.games_per_entity = games;
        self
    }

    /// Set the playoff field and its per-round series lengths together.
    #[must_use]
    pub fn with_playoffs(mut self, field_size: usize, round_series_lengths: Vec<u32>) -> Self {
        self.playoff_field_size = field_size;
        self.round_series_lengths = round_series_lengths;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: RatingModel) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_contest(mut self, contest: ContestConfig) -> Self {
        self.contest = contest;
        self
    }

    #[must_use]
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    #[must_use]
    pub fn with_bye_policy(mut self, policy: ByePolicy) -> Self {
        self.bye_policy = policy;
        self
    }

    #[must_use]
    pub fn with_retirement_policy(mut self, policy: RetirementPolicy) -> Self {
        self.retirement_policy = policy;
        self
    }

    #[must_use]
    pub fn with_balance_limit(mut self, limit: Option<usize>) -> Self {
        self.max_balance_changes_per_season = limit;
        self
    }

    /// Check every section. The playoff format is checked against the
    /// configured field size; a smaller roster is re-checked at run time.
    pub fn validate(&self) -> Result<()> {
        if self.playoff_field_size == 0 {
            return Err(LeagueError::config("playoff_field_size must be positive"));
        }
        if self.playoff_field_size > 1 {
            validate_series_lengths(
                self.playoff_field_size,
                &self.round_series_lengths,
                self.bye_policy,
            )?;
        }
        self.rating.validate()?;
        self.contest.validate()?;
        self.generation.validate()
    }
}
