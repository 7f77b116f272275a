//! Playoff bracket resolution.
//!
//! ## Pairing
//!
//! This is a straight bracket: each round pairs neighbours in the current
//! order (1v2, 3v4, ...) and the winners keep their relative order for the
//! next round. It is *not* conventional 1-vs-N seeding, so the top two
//! seeds meet in the first round.
//!
//! ## Series
//!
//! Each round is a best-of-N series (N odd); the first card to
//! `ceil(N / 2)` contest wins advances. Series contests go through the
//! contest resolver and count toward the cards' running records.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Roster;
use crate::contest::ContestResolver;
use crate::core::{LeagueError, LeagueRng, Result};

/// What to do with a round that has an odd number of cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByePolicy {
    /// Refuse to run the bracket.
    #[default]
    Reject,
    /// The first card in the round's order advances without playing.
    TopSeedBye,
}

/// One playoff series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BracketMatch {
    pub home: String,
    pub away: String,
    pub winner: String,
    pub home_wins: u32,
    pub away_wins: u32,
}

/// All series of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BracketRound {
    pub best_of: u32,
    pub matches: Vec<BracketMatch>,
    /// Card that advanced unplayed, if the round was odd-sized.
    pub bye: Option<String>,
}

/// A completed bracket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BracketResults {
    pub champion: String,
    pub rounds: Vec<BracketRound>,
}

impl BracketResults {
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total series played.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }
}

/// Round sizes for a field, first round first.
///
/// Each round halves the field, rounding up when a bye is allowed.
#[must_use]
pub fn round_sizes(field_size: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut remaining = field_size;
    while remaining > 1 {
        sizes.push(remaining);
        remaining = remaining.div_ceil(2);
    }
    sizes
}

/// Check a series length list against a field.
pub fn validate_series_lengths(
    field_size: usize,
    round_series_lengths: &[u32],
    bye_policy: ByePolicy,
) -> Result<()> {
    let sizes = round_sizes(field_size);

    if bye_policy == ByePolicy::Reject {
        if let Some(odd) = sizes.iter().find(|s| *s % 2 == 1) {
            return Err(LeagueError::config(format!(
                "a field of {field_size} reaches an odd round of {odd} and byes are not allowed"
            )));
        }
    }
    if round_series_lengths.len() != sizes.len() {
        return Err(LeagueError::config(format!(
            "a field of {field_size} needs {} rounds but {} series lengths were given",
            sizes.len(),
            round_series_lengths.len()
        )));
    }
    if let Some(bad) = round_series_lengths.iter().find(|n| **n == 0 || **n % 2 == 0) {
        return Err(LeagueError::config(format!(
            "series length must be a positive odd number, got {bad}"
        )));
    }
    Ok(())
}

/// Runs brackets over roster positions.
#[derive(Clone, Copy, Debug)]
pub struct BracketResolver<'a> {
    resolver: ContestResolver<'a>,
    bye_policy: ByePolicy,
}

impl<'a> BracketResolver<'a> {
    #[must_use]
    pub fn new(resolver: ContestResolver<'a>, bye_policy: ByePolicy) -> Self {
        Self {
            resolver,
            bye_policy,
        }
    }

    /// Resolve a bracket down to one champion.
    ///
    /// `seeds` are roster positions in seeding order. Fewer than two seeds
    /// means no playoffs: `Ok(None)`. Configuration is checked before any
    /// contest is played, so an error leaves the roster untouched.
    pub fn run(
        &self,
        roster: &mut Roster,
        seeds: &[usize],
        round_series_lengths: &[u32],
        rng: &mut LeagueRng,
    ) -> Result<Option<BracketResults>> {
        if seeds.len() < 2 {
            return Ok(None);
        }
        validate_series_lengths(seeds.len(), round_series_lengths, self.bye_policy)?;
        if let Some(&bad) = seeds.iter().find(|&&s| s >= roster.len()) {
            return Err(LeagueError::config(format!("seed position {bad} is not in the roster")));
        }
        for (i, seed) in seeds.iter().enumerate() {
            if seeds[..i].contains(seed) {
                return Err(LeagueError::InvalidMatchup {
                    name: roster.card_at(*seed).name.clone(),
                });
            }
        }

        let mut field: Vec<usize> = seeds.to_vec();
        let mut rounds = Vec::with_capacity(round_series_lengths.len());

        for &best_of in round_series_lengths {
            let mut advancing = Vec::with_capacity(field.len().div_ceil(2));
            let mut bye = None;

            let mut pairs = field.as_slice();
            if pairs.len() % 2 == 1 {
                let top = pairs[0];
                bye = Some(roster.card_at(top).name.clone());
                advancing.push(top);
                pairs = &pairs[1..];
            }

            let mut matches = Vec::with_capacity(pairs.len() / 2);
            for pair in pairs.chunks_exact(2) {
                let (winner, series) = self.play_series(roster, pair[0], pair[1], best_of, rng)?;
                advancing.push(winner);
                matches.push(series);
            }

            rounds.push(BracketRound {
                best_of,
                matches,
                bye,
            });
            field = advancing;
        }

        let champion_position = field[0];
        let champion = roster.card_at(champion_position).name.clone();
        if let Some(card) = roster.get_mut(&champion) {
            card.championships += 1;
        }
        info!(champion = %champion, rounds = rounds.len(), "playoffs complete");

        Ok(Some(BracketResults { champion, rounds }))
    }

    fn play_series(
        &self,
        roster: &mut Roster,
        home: usize,
        away: usize,
        best_of: u32,
        rng: &mut LeagueRng,
    ) -> Result<(usize, BracketMatch)> {
        let needed = best_of.div_ceil(2);
        let (mut home_wins, mut away_wins) = (0u32, 0u32);

        while home_wins < needed && away_wins < needed {
            let (winner, _) = self.resolver.resolve_in(roster, home, away, rng)?;
            if winner == home {
                home_wins += 1;
            } else {
                away_wins += 1;
            }
        }

        let winner = if home_wins > away_wins { home } else { away };
        let series = BracketMatch {
            home: roster.card_at(home).name.clone(),
            away: roster.card_at(away).name.clone(),
            winner: roster.card_at(winner).name.clone(),
            home_wins,
            away_wins,
        };
        debug!(
            home = %series.home,
            away = %series.away,
            winner = %series.winner,
            "series {}-{}",
            home_wins,
            away_wins
        );
        Ok((winner, series))
    }
}
