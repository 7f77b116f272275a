//! # card-league
//!
//! A deterministic rating, season and playoff engine for card leagues.
//!
//! ## Design Principles
//!
//! 1. **Pure Ratings**: A card's rating is a function of its attributes and
//!    the `RatingModel`, nothing else. Randomness only enters in contests.
//!
//! 2. **Seeded Everything**: Every operation that rolls dice takes a seed and
//!    draws from a `LeagueRng` (ChaCha8). Same calls, same league.
//!
//! 3. **Configuration Over Convention**: Season length, playoff format,
//!    weights, grade thresholds and policies all live in `LeagueConfig`.
//!
//! ## Architecture
//!
//! - **Explicit Session**: A `League` owns the roster and history. There is
//!   no global state; run as many leagues side by side as you like.
//!
//! - **Append-only History**: The `HistoryLedger` uses `im-rs` vectors, so
//!   snapshots clone in O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Attributes, cards, generation and the roster
//! - `rating`: Rating model and grade scale
//! - `contest`: Single-contest resolution
//! - `season`: Season simulation, standings and awards
//! - `bracket`: Playoff brackets
//! - `history`: Season, balance and performance records
//! - `league`: The `League` session and its snapshots

pub mod core;
pub mod cards;
pub mod rating;
pub mod contest;
pub mod season;
pub mod bracket;
pub mod history;
pub mod league;

// Re-export commonly used types
pub use crate::core::{LeagueConfig, LeagueError, LeagueRng, Result, RetirementPolicy};

pub use crate::cards::{
    AttackCategory, AttributeChange, AttributeDelta, Card, CardAttributes, GenerationConfig,
    MobilityTier, Roster, StatRange, DEFAULT_CARD_NAMES,
};

pub use crate::rating::{Grade, GradeScale, GradeThreshold, RatingModel, RatingWeights, MAX_RATING};

pub use crate::contest::{ContestConfig, ContestOutcome, ContestResolver, Side};

pub use crate::season::{standings, SeasonAwards, SeasonSimulator, SeasonSummary, StandingsEntry, StandingsSnapshot};

pub use crate::bracket::{BracketMatch, BracketResolver, BracketResults, BracketRound, ByePolicy};

pub use crate::history::{
    BalanceChangeRecord, BalanceDirection, HistoryLedger, PerformancePoint, SeasonRecord,
};

pub use crate::league::{ChampionshipRow, League, LeagueSnapshot, RetiredCard, SNAPSHOT_SCHEMA_VERSION};
