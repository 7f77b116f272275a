//! Seasons: simulation, standings and awards.

pub mod awards;
pub mod simulator;
pub mod standings;

pub use awards::SeasonAwards;
pub use simulator::{SeasonSimulator, SeasonSummary};
pub use standings::{standings, StandingsEntry, StandingsSnapshot};
