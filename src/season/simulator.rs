//! Season simulation.
//!
//! ## Scheduling
//!
//! Every card, in roster order, initiates `games_per_entity` contests
//! against opponents drawn uniformly (with replacement) from the rest of
//! the roster. A card's realized game count is therefore its own
//! `games_per_entity` plus the number of times it was drawn as someone
//! else's opponent, and a season plays `N * games_per_entity` contests
//! in total.
//!
//! ## Record keeping
//!
//! Wins and losses are zeroed at season start. Streaks run across seasons
//! and are only cleared at rollover.

use tracing::{debug, info};

use super::standings::StandingsSnapshot;
use crate::cards::Roster;
use crate::contest::ContestResolver;
use crate::core::{LeagueError, LeagueRng, Result};

/// Outcome of one simulated season.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonSummary {
    pub standings: StandingsSnapshot,
    /// Contests played.
    pub games_played: u32,
}

/// Drives a full season of contests over a roster.
#[derive(Clone, Copy, Debug)]
pub struct SeasonSimulator<'a> {
    resolver: ContestResolver<'a>,
}

impl<'a> SeasonSimulator<'a> {
    #[must_use]
    pub fn new(resolver: ContestResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Reset records, play the season and rank the roster.
    ///
    /// Rosters with fewer than two cards play no contests.
    pub fn simulate(
        &self,
        roster: &mut Roster,
        games_per_entity: u32,
        rng: &mut LeagueRng,
    ) -> Result<SeasonSummary> {
        for card in roster.iter_mut() {
            card.reset_record();
        }

        let mut games_played = 0u32;
        'schedule: for home in 0..roster.len() {
            for _ in 0..games_per_entity {
                let away = match roster.draw_opponent(home, rng) {
                    Ok(away) => away,
                    Err(LeagueError::EmptyRoster) => break 'schedule,
                    Err(e) => return Err(e),
                };
                self.resolver.resolve_in(roster, home, away, rng)?;
                games_played += 1;
            }
        }

        let standings = StandingsSnapshot::from_roster(roster, self.resolver.rating_model());
        if let Some(leader) = standings.leader() {
            info!(
                games = games_played,
                leader = %leader.name,
                wins = leader.wins,
                losses = leader.losses,
                "season simulated"
            );
        } else {
            debug!("season simulated on an empty roster");
        }

        Ok(SeasonSummary {
            standings,
            games_played,
        })
    }

    /// Play `count` contests between randomly drawn pairs.
    ///
    /// Records are not reset. Returns `(winner, loser)` names per contest;
    /// empty when the roster can't field a pair.
    pub fn play_exhibition(
        &self,
        roster: &mut Roster,
        count: u32,
        rng: &mut LeagueRng,
    ) -> Result<Vec<(String, String)>> {
        let mut results = Vec::new();
        for _ in 0..count {
            let (home, away) = match roster.draw_pair(rng) {
                Ok(pair) => pair,
                Err(LeagueError::EmptyRoster) => break,
                Err(e) => return Err(e),
            };
            let (winner, loser) = self.resolver.resolve_in(roster, home, away, rng)?;
            results.push((
                roster.card_at(winner).name.clone(),
                roster.card_at(loser).name.clone(),
            ));
        }
        Ok(results)
    }
}
