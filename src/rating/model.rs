//! The rating function.
//!
//! A rating is a weighted sum of normalized attribute contributions:
//!
//! ```text
//! power    = attack_power / max_attack_power
//! speed    = (slowest - attack_speed) / (slowest - fastest)
//! range    = range / max_range
//! health   = health / max_health
//! category = category factor (ranged hits harder than melee)
//! mobility = mobility factor (faster tiers score higher)
//!
//! rating   = 100 * Σ weight * clamp(component, 0, 1)
//! ```
//!
//! Weights sum to 1.0, so the result always lands in `[0, 100]`. There is no
//! random term; contest noise lives in the contest resolver.

use serde::{Deserialize, Serialize};

use super::grade::{Grade, GradeScale};
use crate::cards::{AttackCategory, CardAttributes, MobilityTier};
use crate::core::{LeagueError, Result};

/// Upper bound of every rating.
pub const MAX_RATING: f64 = 100.0;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Contribution weight of each attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingWeights {
    pub attack_power: f64,
    pub attack_speed: f64,
    pub range: f64,
    pub health: f64,
    pub attack_category: f64,
    pub mobility: f64,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            attack_power: 0.23,
            attack_speed: 0.13,
            range: 0.08,
            health: 0.26,
            attack_category: 0.11,
            mobility: 0.19,
        }
    }
}

impl RatingWeights {
    fn as_array(&self) -> [f64; 6] {
        [
            self.attack_power,
            self.attack_speed,
            self.range,
            self.health,
            self.attack_category,
            self.mobility,
        ]
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.as_array().iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(LeagueError::config("rating weights must be non-negative"));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(LeagueError::config(format!(
                "rating weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Reference values attributes are scaled against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizationBounds {
    pub max_attack_power: f64,
    /// Attack interval scoring 1.0 (seconds).
    pub fastest_attack_speed: f64,
    /// Attack interval scoring 0.0 (seconds).
    pub slowest_attack_speed: f64,
    pub max_range: f64,
    pub max_health: f64,
}

impl Default for NormalizationBounds {
    fn default() -> Self {
        Self {
            max_attack_power: 1200.0,
            fastest_attack_speed: 1.0,
            slowest_attack_speed: 3.0,
            max_range: 10.0,
            max_health: 2500.0,
        }
    }
}

impl NormalizationBounds {
    pub fn validate(&self) -> Result<()> {
        let positive = [self.max_attack_power, self.max_range, self.max_health];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(LeagueError::config("normalization maxima must be positive"));
        }
        if !(self.slowest_attack_speed > self.fastest_attack_speed) {
            return Err(LeagueError::config(
                "slowest attack speed must exceed fastest attack speed",
            ));
        }
        Ok(())
    }
}

/// Score of each attack category, in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryFactors {
    pub ground_melee: f64,
    pub air_melee: f64,
    pub ground_ranged: f64,
    pub air_ranged: f64,
}

impl Default for CategoryFactors {
    fn default() -> Self {
        Self {
            ground_melee: 0.7,
            air_melee: 0.7,
            ground_ranged: 1.0,
            air_ranged: 1.0,
        }
    }
}

impl CategoryFactors {
    #[must_use]
    pub fn factor(&self, category: AttackCategory) -> f64 {
        match category {
            AttackCategory::GroundMelee => self.ground_melee,
            AttackCategory::AirMelee => self.air_melee,
            AttackCategory::GroundRanged => self.ground_ranged,
            AttackCategory::AirRanged => self.air_ranged,
        }
    }
}

/// Score of each mobility tier, in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobilityFactors {
    pub very_slow: f64,
    pub slow: f64,
    pub medium: f64,
    pub fast: f64,
    pub very_fast: f64,
}

impl Default for MobilityFactors {
    fn default() -> Self {
        Self {
            very_slow: 0.6,
            slow: 0.7,
            medium: 0.8,
            fast: 0.9,
            very_fast: 1.0,
        }
    }
}

impl MobilityFactors {
    #[must_use]
    pub fn factor(&self, tier: MobilityTier) -> f64 {
        match tier {
            MobilityTier::VerySlow => self.very_slow,
            MobilityTier::Slow => self.slow,
            MobilityTier::Medium => self.medium,
            MobilityTier::Fast => self.fast,
            MobilityTier::VeryFast => self.very_fast,
        }
    }
}

/// Everything needed to turn attributes into a rating and a grade.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingModel {
    pub weights: RatingWeights,
    pub bounds: NormalizationBounds,
    pub categories: CategoryFactors,
    pub mobility: MobilityFactors,
    pub grades: GradeScale,
}

impl RatingModel {
    #[must_use]
    pub fn with_weights(mut self, weights: RatingWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_grades(mut self, grades: GradeScale) -> Self {
        self.grades = grades;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.bounds.validate()?;
        self.grades.validate()
    }

    /// Rating in `[0, MAX_RATING]`. Pure: same attributes, same rating.
    #[must_use]
    pub fn rating(&self, attrs: &CardAttributes) -> f64 {
        let b = &self.bounds;
        let w = &self.weights;

        let power = f64::from(attrs.attack_power) / b.max_attack_power;
        let speed = (b.slowest_attack_speed - attrs.attack_speed)
            / (b.slowest_attack_speed - b.fastest_attack_speed);
        let range = f64::from(attrs.range) / b.max_range;
        let health = f64::from(attrs.health) / b.max_health;
        let category = self.categories.factor(attrs.attack_category);
        let mobility = self.mobility.factor(attrs.mobility);

        let score = w.attack_power * unit(power)
            + w.attack_speed * unit(speed)
            + w.range * unit(range)
            + w.health * unit(health)
            + w.attack_category * unit(category)
            + w.mobility * unit(mobility);

        (score * MAX_RATING).clamp(0.0, MAX_RATING)
    }

    #[must_use]
    pub fn grade(&self, rating: f64) -> Grade {
        self.grades.grade(rating)
    }

    #[must_use]
    pub fn grade_for(&self, attrs: &CardAttributes) -> Grade {
        self.grade(self.rating(attrs))
    }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
