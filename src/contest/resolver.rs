//! Contest resolution - deciding a single game between two cards.
//!
//! Each side's score blends its rating with a bounded uniform perturbation:
//!
//! ```text
//! score = rating_weight * rating + (1 - rating_weight) * U(-noise_amplitude, noise_amplitude)
//! ```
//!
//! The higher score wins. Ties go to the home (first) card, so a
//! noise-free contest between equal ratings is still reproducible.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Roster};
use crate::core::{LeagueError, LeagueRng, Result};
use crate::rating::RatingModel;

/// Blend between rating and randomness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestConfig {
    /// Share of the score taken from the rating, in `[0, 1]`.
    pub rating_weight: f64,
    /// Half-width of the uniform noise term.
    pub noise_amplitude: f64,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            rating_weight: 0.78,
            noise_amplitude: 5.0,
        }
    }
}

impl ContestConfig {
    /// Noise-free contests: the higher rating always wins.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            rating_weight: 1.0,
            noise_amplitude: 0.0,
        }
    }

    #[must_use]
    pub fn with_rating_weight(mut self, weight: f64) -> Self {
        self.rating_weight = weight;
        self
    }

    #[must_use]
    pub fn with_noise_amplitude(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.rating_weight) {
            return Err(LeagueError::config("contest rating_weight must be within [0, 1]"));
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(LeagueError::config("contest noise_amplitude must be non-negative"));
        }
        Ok(())
    }

    fn noise_weight(&self) -> f64 {
        1.0 - self.rating_weight
    }
}

/// Which side of a contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// Result of one contest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContestOutcome {
    pub winner: Side,
    pub home_score: f64,
    pub away_score: f64,
}

impl ContestOutcome {
    #[must_use]
    pub fn home_won(&self) -> bool {
        self.winner == Side::Home
    }
}

/// Resolves contests under a rating model and contest config.
#[derive(Clone, Copy, Debug)]
pub struct ContestResolver<'a> {
    rating: &'a RatingModel,
    config: &'a ContestConfig,
}

impl<'a> ContestResolver<'a> {
    #[must_use]
    pub fn new(rating: &'a RatingModel, config: &'a ContestConfig) -> Self {
        Self { rating, config }
    }

    #[must_use]
    pub fn rating_model(&self) -> &'a RatingModel {
        self.rating
    }

    fn score(&self, rating: f64, rng: &mut LeagueRng) -> f64 {
        let amplitude = self.config.noise_amplitude;
        let noise = if amplitude > 0.0 {
            rng.gen_f64_range(-amplitude, amplitude)
        } else {
            0.0
        };
        self.config.rating_weight * rating + self.config.noise_weight() * noise
    }

    /// Play one contest and record the result on both cards.
    pub fn resolve(&self, home: &mut Card, away: &mut Card, rng: &mut LeagueRng) -> Result<ContestOutcome> {
        if home.name == away.name {
            return Err(LeagueError::InvalidMatchup { name: home.name.clone() });
        }

        let home_score = self.score(home.rating(self.rating), rng);
        let away_score = self.score(away.rating(self.rating), rng);
        let winner = if home_score >= away_score { Side::Home } else { Side::Away };

        home.record_result(winner == Side::Home);
        away.record_result(winner == Side::Away);

        Ok(ContestOutcome {
            winner,
            home_score,
            away_score,
        })
    }

    /// Play a contest between two roster positions.
    ///
    /// Returns `(winner, loser)` positions.
    pub fn resolve_in(
        &self,
        roster: &mut Roster,
        home: usize,
        away: usize,
        rng: &mut LeagueRng,
    ) -> Result<(usize, usize)> {
        let (home_card, away_card) = roster.pair_mut(home, away)?;
        let outcome = self.resolve(home_card, away_card, rng)?;
        Ok(if outcome.home_won() { (home, away) } else { (away, home) })
    }
}
