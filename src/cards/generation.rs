//! Randomized card generation.
//!
//! Attribute ranges are configuration, not constants baked into `Card`.
//! The defaults reproduce the stock league: damage 80-1200, attack speed
//! 1.0-3.0 seconds, range 1-10, health 900-2500.

use serde::{Deserialize, Serialize};

use super::attributes::{AttackCategory, CardAttributes, MobilityTier};
use crate::core::{LeagueError, LeagueRng, Result};

/// The stock roster of the league, in seeding order.
pub const DEFAULT_CARD_NAMES: [&str; 79] = [
    "Knight", "Archers", "Goblins", "Giant", "P.E.K.K.A", "Mini P.E.K.K.A", "Hog Rider",
    "Musketeer", "Baby Dragon", "Prince", "Witch", "Valkyrie", "Skeleton Army", "Bomber",
    "Hunter", "Electro Wizard", "Wizard", "Ice Wizard", "Mega Minion", "Inferno Dragon",
    "Lumberjack", "Bandit", "Royal Ghost", "Magic Archer", "Dart Goblin", "Firecracker",
    "Archer Queen", "Golden Knight", "Skeleton King", "Monk", "Phoenix", "Miner", "Mega Knight",
    "Electro Dragon", "Sparky", "Cannon Cart", "Flying Machine", "Battle Ram", "Ram Rider",
    "Royal Recruits", "Royal Hogs", "Elite Barbarians", "Barbarians", "Minions", "Minion Horde",
    "Ice Spirit", "Fire Spirit", "Electro Spirit", "Heal Spirit", "Bats", "Wall Breakers",
    "Goblin Gang", "Guards", "Dark Prince", "Bowler", "Executioner", "Fisherman", "Zappies",
    "Rascals", "Mother Witch", "Royal Champion", "Mortar", "X-Bow", "Tesla", "Cannon",
    "Bomb Tower", "Inferno Tower", "Goblin Hut", "Barbarian Hut", "Furnace", "Tombstone",
    "Elixir Golem", "Golem", "Ice Golem", "Skeletons", "Graveyard", "Clone", "Freeze",
    "Lightning",
];

/// Inclusive bounds for a generated stat.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> StatRange<T> {
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Ranges used to roll new cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub attack_power: StatRange<u32>,
    /// Seconds between attacks; rolled values are rounded to hundredths.
    pub attack_speed: StatRange<f64>,
    pub range: StatRange<u32>,
    pub health: StatRange<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            attack_power: StatRange::new(80, 1200),
            attack_speed: StatRange::new(1.0, 3.0),
            range: StatRange::new(1, 10),
            health: StatRange::new(900, 2500),
        }
    }
}

impl GenerationConfig {
    /// Check that every range is non-empty and yields valid attributes.
    pub fn validate(&self) -> Result<()> {
        if self.attack_power.min == 0 || self.attack_power.min > self.attack_power.max {
            return Err(LeagueError::config("attack_power range must be positive and ordered"));
        }
        let speed = self.attack_speed;
        if !(speed.min.is_finite() && speed.max.is_finite()) || speed.min <= 0.0 || speed.min > speed.max {
            return Err(LeagueError::config("attack_speed range must be positive and ordered"));
        }
        if self.range.min > self.range.max {
            return Err(LeagueError::config("range bounds are out of order"));
        }
        if self.health.min == 0 || self.health.min > self.health.max {
            return Err(LeagueError::config("health range must be positive and ordered"));
        }
        Ok(())
    }

    /// Roll one attribute set.
    pub fn sample(&self, rng: &mut LeagueRng) -> CardAttributes {
        let attack_power = rng.gen_range_u32(self.attack_power.min..=self.attack_power.max);
        let category = AttackCategory::ALL[rng.gen_index(AttackCategory::ALL.len())];
        let speed = rng.gen_f64_range(self.attack_speed.min, self.attack_speed.max);
        // Bounds off the hundredths grid would otherwise round outside the range
        let attack_speed = ((speed * 100.0).round() / 100.0)
            .clamp(self.attack_speed.min, self.attack_speed.max);
        let mobility = MobilityTier::ALL[rng.gen_index(MobilityTier::ALL.len())];
        let range = rng.gen_range_u32(self.range.min..=self.range.max);
        let health = rng.gen_range_u32(self.health.min..=self.health.max);

        CardAttributes {
            attack_power,
            attack_speed,
            range,
            health,
            attack_category: category,
            mobility,
        }
    }
}
