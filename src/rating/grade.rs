//! Grade tiers derived from a rating.
//!
//! A `GradeScale` is an ordered list of `(minimum rating, grade)` pairs,
//! best tier first. A rating earns the first tier whose minimum it meets;
//! minimums are inclusive.

use serde::{Deserialize, Serialize};

use crate::core::{LeagueError, Result};

/// Discrete tier label, ordered worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
    APlus,
    Meta,
}

impl Grade {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Grade::F => "F",
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::APlus => "A+",
            Grade::Meta => "Meta",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One tier boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeThreshold {
    pub min_rating: f64,
    pub grade: Grade,
}

impl GradeThreshold {
    #[must_use]
    pub const fn new(min_rating: f64, grade: Grade) -> Self {
        Self { min_rating, grade }
    }
}

/// Ordered tier boundaries, best first, ending in a catch-all at 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    thresholds: Vec<GradeThreshold>,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            thresholds: vec![
                GradeThreshold::new(98.0, Grade::Meta),
                GradeThreshold::new(95.0, Grade::APlus),
                GradeThreshold::new(90.0, Grade::A),
                GradeThreshold::new(84.0, Grade::B),
                GradeThreshold::new(77.0, Grade::C),
                GradeThreshold::new(71.0, Grade::D),
                GradeThreshold::new(0.0, Grade::F),
            ],
        }
    }
}

impl GradeScale {
    /// Build a scale, rejecting anything that would make grades non-monotone.
    pub fn new(thresholds: Vec<GradeThreshold>) -> Result<Self> {
        let scale = Self { thresholds };
        scale.validate()?;
        Ok(scale)
    }

    /// Minimums and tiers must both strictly descend, and the last tier
    /// must catch everything from 0.
    pub fn validate(&self) -> Result<()> {
        let last = self
            .thresholds
            .last()
            .ok_or_else(|| LeagueError::config("grade scale has no tiers"))?;
        if last.min_rating != 0.0 {
            return Err(LeagueError::config("last grade tier must start at 0"));
        }
        for pair in self.thresholds.windows(2) {
            if !(pair[0].min_rating > pair[1].min_rating) {
                return Err(LeagueError::config(format!(
                    "grade minimums must descend: {} then {}",
                    pair[0].min_rating, pair[1].min_rating
                )));
            }
            if pair[0].grade <= pair[1].grade {
                return Err(LeagueError::config(format!(
                    "grade tiers must descend: {} then {}",
                    pair[0].grade, pair[1].grade
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn thresholds(&self) -> &[GradeThreshold] {
        &self.thresholds
    }

    /// Tier for a rating. Ratings below every minimum get the lowest tier.
    #[must_use]
    pub fn grade(&self, rating: f64) -> Grade {
        self.thresholds
            .iter()
            .find(|t| rating >= t.min_rating)
            .or_else(|| self.thresholds.last())
            .map_or(Grade::F, |t| t.grade)
    }
}
