//! Core engine types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{LeagueConfig, RetirementPolicy};
pub use error::{LeagueError, Result};
pub use rng::LeagueRng;
