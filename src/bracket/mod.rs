//! Playoff brackets.

pub mod resolver;

pub use resolver::{
    round_sizes, validate_series_lengths, BracketMatch, BracketResolver, BracketResults,
    BracketRound, ByePolicy,
};
