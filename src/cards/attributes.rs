//! Card attributes: the raw stats a rating is computed from.
//!
//! ## Conventions
//!
//! - `attack_speed` is seconds between attacks, so **lower is faster**.
//! - `range` may be zero (pure melee contact), every other number is positive.
//!
//! Attributes only change through a balance change, which reports the
//! per-field deltas as an [`AttributeDelta`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LeagueError, Result};

/// How a card delivers its attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackCategory {
    GroundMelee,
    AirMelee,
    GroundRanged,
    AirRanged,
}

impl AttackCategory {
    pub const ALL: [AttackCategory; 4] = [
        AttackCategory::GroundMelee,
        AttackCategory::AirMelee,
        AttackCategory::GroundRanged,
        AttackCategory::AirRanged,
    ];

    #[must_use]
    pub const fn is_ranged(self) -> bool {
        matches!(self, AttackCategory::GroundRanged | AttackCategory::AirRanged)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AttackCategory::GroundMelee => "Ground Melee",
            AttackCategory::AirMelee => "Air Melee",
            AttackCategory::GroundRanged => "Ground Ranged",
            AttackCategory::AirRanged => "Air Ranged",
        }
    }
}

impl std::fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Movement speed tier, ordered slowest to fastest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MobilityTier {
    VerySlow,
    Slow,
    Medium,
    Fast,
    VeryFast,
}

impl MobilityTier {
    pub const ALL: [MobilityTier; 5] = [
        MobilityTier::VerySlow,
        MobilityTier::Slow,
        MobilityTier::Medium,
        MobilityTier::Fast,
        MobilityTier::VeryFast,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MobilityTier::VerySlow => "Very Slow",
            MobilityTier::Slow => "Slow",
            MobilityTier::Medium => "Medium",
            MobilityTier::Fast => "Fast",
            MobilityTier::VeryFast => "Very Fast",
        }
    }
}

impl std::fmt::Display for MobilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The tracked stats of a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardAttributes {
    /// Damage per attack.
    pub attack_power: u32,
    /// Seconds between attacks (lower is faster).
    pub attack_speed: f64,
    /// Attack reach in tiles.
    pub range: u32,
    /// Hit points.
    pub health: u32,
    pub attack_category: AttackCategory,
    pub mobility: MobilityTier,
}

impl CardAttributes {
    /// Create attributes with the given combat numbers.
    ///
    /// Category and mobility default to ground melee at medium speed;
    /// use the builder methods to change them.
    #[must_use]
    pub fn new(attack_power: u32, attack_speed: f64, range: u32, health: u32) -> Self {
        Self {
            attack_power,
            attack_speed,
            range,
            health,
            attack_category: AttackCategory::GroundMelee,
            mobility: MobilityTier::Medium,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: AttackCategory) -> Self {
        self.attack_category = category;
        self
    }

    #[must_use]
    pub fn with_mobility(mut self, mobility: MobilityTier) -> Self {
        self.mobility = mobility;
        self
    }

    /// Check the value invariants, naming `owner` in the error.
    pub fn validate(&self, owner: &str) -> Result<()> {
        let reason = if self.attack_power == 0 {
            Some("attack_power must be positive")
        } else if !self.attack_speed.is_finite() || self.attack_speed <= 0.0 {
            Some("attack_speed must be a positive finite number")
        } else if self.health == 0 {
            Some("health must be positive")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(LeagueError::InvalidAttributes {
                name: owner.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Field-by-field differences going from `self` to `other`.
    #[must_use]
    pub fn diff(&self, other: &CardAttributes) -> AttributeDelta {
        let mut changes = SmallVec::new();

        if self.attack_power != other.attack_power {
            changes.push(AttributeChange::AttackPower {
                before: self.attack_power,
                after: other.attack_power,
            });
        }
        if self.attack_speed != other.attack_speed {
            changes.push(AttributeChange::AttackSpeed {
                before: self.attack_speed,
                after: other.attack_speed,
            });
        }
        if self.range != other.range {
            changes.push(AttributeChange::Range {
                before: self.range,
                after: other.range,
            });
        }
        if self.health != other.health {
            changes.push(AttributeChange::Health {
                before: self.health,
                after: other.health,
            });
        }
        if self.attack_category != other.attack_category {
            changes.push(AttributeChange::Category {
                before: self.attack_category,
                after: other.attack_category,
            });
        }
        if self.mobility != other.mobility {
            changes.push(AttributeChange::Mobility {
                before: self.mobility,
                after: other.mobility,
            });
        }

        AttributeDelta { changes }
    }
}

/// A single changed field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeChange {
    AttackPower { before: u32, after: u32 },
    AttackSpeed { before: f64, after: f64 },
    Range { before: u32, after: u32 },
    Health { before: u32, after: u32 },
    Category { before: AttackCategory, after: AttackCategory },
    Mobility { before: MobilityTier, after: MobilityTier },
}

/// All fields changed by one attribute update.
///
/// At most six fields can change, so this never spills to the heap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeDelta {
    pub changes: SmallVec<[AttributeChange; 6]>,
}

impl AttributeDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeChange> {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CardAttributes {
        CardAttributes::new(600, 1.5, 5, 1800)
            .with_category(AttackCategory::AirRanged)
            .with_mobility(MobilityTier::Fast)
    }

    #[test]
    fn test_builder() {
        let attrs = sample();
        assert_eq!(attrs.attack_power, 600);
        assert_eq!(attrs.attack_category, AttackCategory::AirRanged);
        assert_eq!(attrs.mobility, MobilityTier::Fast);
    }

    #[test]
    fn test_mobility_ordering() {
        assert!(MobilityTier::VerySlow < MobilityTier::Slow);
        assert!(MobilityTier::Fast < MobilityTier::VeryFast);
    }

    #[test]
    fn test_category_ranged() {
        assert!(AttackCategory::GroundRanged.is_ranged());
        assert!(!AttackCategory::AirMelee.is_ranged());
        assert_eq!(AttackCategory::AirRanged.to_string(), "Air Ranged");
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate("Knight").is_ok());

        let mut bad = sample();
        bad.health = 0;
        assert!(matches!(
            bad.validate("Knight"),
            Err(LeagueError::InvalidAttributes { .. })
        ));

        let mut bad = sample();
        bad.attack_speed = f64::NAN;
        assert!(bad.validate("Knight").is_err());

        let mut zero_range = sample();
        zero_range.range = 0;
        assert!(zero_range.validate("Knight").is_ok());
    }

    #[test]
    fn test_diff_identical_is_empty() {
        let attrs = sample();
        assert!(attrs.diff(&attrs.clone()).is_empty());
    }

    #[test]
    fn test_diff_reports_changed_fields() {
        let before = sample();
        let mut after = sample();
        after.attack_power = 700;
        after.mobility = MobilityTier::Slow;

        let delta = before.diff(&after);
        assert_eq!(delta.len(), 2);
        assert_eq!(
            delta.changes[0],
            AttributeChange::AttackPower { before: 600, after: 700 }
        );
        assert_eq!(
            delta.changes[1],
            AttributeChange::Mobility {
                before: MobilityTier::Fast,
                after: MobilityTier::Slow
            }
        );
    }
}
