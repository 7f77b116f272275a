//! End-of-season awards.

use serde::{Deserialize, Serialize};

use super::standings::StandingsSnapshot;
use crate::history::HistoryLedger;

/// Awards handed out from the current standings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonAwards {
    /// Rank 1.
    pub mvp: Option<String>,
    /// Largest win gain over the card's previous recorded season.
    pub most_improved: Option<String>,
    /// Top of the standings, best first.
    pub all_league_team: Vec<String>,
}

impl SeasonAwards {
    /// Compute awards. `previous_season` is the season whose performance
    /// points the current wins are compared against.
    #[must_use]
    pub fn compute(
        standings: &StandingsSnapshot,
        ledger: &HistoryLedger,
        previous_season: Option<u32>,
        team_size: usize,
    ) -> Self {
        let mvp = standings.leader().map(|e| e.name.clone());
        let all_league_team = standings.top(team_size).iter().map(|e| e.name.clone()).collect();

        // Ties go to the better-ranked card
        let most_improved = previous_season.and_then(|season| {
            standings
                .iter()
                .filter_map(|entry| {
                    let before = ledger
                        .performance(&entry.name)
                        .iter()
                        .find(|p| p.season_number == season)?;
                    let gain = i64::from(entry.wins) - i64::from(before.wins);
                    (gain > 0).then_some((gain, entry))
                })
                .fold(None, |best: Option<(i64, &_)>, (gain, entry)| match best {
                    Some((best_gain, _)) if best_gain >= gain => best,
                    _ => Some((gain, entry)),
                })
                .map(|(_, entry)| entry.name.clone())
        });

        Self {
            mvp,
            most_improved,
            all_league_team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardAttributes, Roster};
    use crate::history::PerformancePoint;
    use crate::rating::RatingModel;

    fn roster(records: &[(&str, u32)]) -> Roster {
        Roster::from_cards(records.iter().map(|(name, wins)| {
            let mut card = Card::new(*name, CardAttributes::new(500, 2.0, 5, 1500));
            card.wins = *wins;
            card
        }))
        .unwrap()
    }

    fn point(season: u32, wins: u32) -> PerformancePoint {
        PerformancePoint {
            season_number: season,
            wins,
            losses: 0,
            rating: 60.0,
        }
    }

    #[test]
    fn test_mvp_and_team() {
        let roster = roster(&[("A", 3), ("B", 9), ("C", 6)]);
        let standings = StandingsSnapshot::from_roster(&roster, &RatingModel::default());
        let awards = SeasonAwards::compute(&standings, &HistoryLedger::new(), None, 2);

        assert_eq!(awards.mvp.as_deref(), Some("B"));
        assert_eq!(awards.all_league_team, vec!["B", "C"]);
        assert!(awards.most_improved.is_none());
    }

    #[test]
    fn test_most_improved() {
        let roster = roster(&[("A", 10), ("B", 12), ("C", 4)]);
        let standings = StandingsSnapshot::from_roster(&roster, &RatingModel::default());

        let mut ledger = HistoryLedger::new();
        ledger.record_performance("A", point(1, 2));
        ledger.record_performance("B", point(1, 11));
        ledger.record_performance("C", point(1, 9));

        let awards = SeasonAwards::compute(&standings, &ledger, Some(1), 10);
        assert_eq!(awards.most_improved.as_deref(), Some("A"));
    }

    #[test]
    fn test_no_improvement_means_no_award() {
        let roster = roster(&[("A", 1)]);
        let standings = StandingsSnapshot::from_roster(&roster, &RatingModel::default());

        let mut ledger = HistoryLedger::new();
        ledger.record_performance("A", point(1, 5));

        let awards = SeasonAwards::compute(&standings, &ledger, Some(1), 10);
        assert!(awards.most_improved.is_none());
    }

    #[test]
    fn test_empty_standings() {
        let awards = SeasonAwards::compute(&StandingsSnapshot::default(), &HistoryLedger::new(), Some(1), 10);
        assert_eq!(awards, SeasonAwards::default());
    }
}
