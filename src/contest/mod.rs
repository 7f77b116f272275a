//! Single-contest resolution.

pub mod resolver;

pub use resolver::{ContestConfig, ContestOutcome, ContestResolver, Side};
