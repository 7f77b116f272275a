//! The `League` session object.
//!
//! A `League` owns the roster, the history ledger and the season counter,
//! and is the only place where the lower-level pieces are wired together.
//! Every operation that rolls dice takes its own seed, so a session replays
//! exactly given the same sequence of calls.
//!
//! ## Season lifecycle
//!
//! 1. `simulate_season`: regular season, records the season result
//! 2. `run_bracket`: optional playoffs, attached to that season's record
//! 3. `apply_balance_change`: any number of edits, within the budget
//! 4. `rollover_season`: archive grades, clear streaks, advance the counter

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::snapshot::{LeagueSnapshot, SNAPSHOT_SCHEMA_VERSION};
use crate::bracket::{round_sizes, BracketResolver, BracketResults};
use crate::cards::{Card, CardAttributes, Roster};
use crate::contest::ContestResolver;
use crate::core::{LeagueConfig, LeagueError, LeagueRng, Result, RetirementPolicy};
use crate::history::{
    BalanceChangeRecord, BalanceDirection, HistoryLedger, PerformancePoint, SeasonRecord,
};
use crate::season::{SeasonAwards, SeasonSimulator, StandingsSnapshot};

/// A card removed from the league, kept for the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetiredCard {
    pub card: Card,
    pub retired_in_season: u32,
    pub final_rating: f64,
}

/// One row of the all-time championship table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChampionshipRow {
    pub name: String,
    pub championships: u32,
    pub retired: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct League {
    config: LeagueConfig,
    season: u32,
    roster: Roster,
    retired: Vec<RetiredCard>,
    history: HistoryLedger,
    /// Cards edited this season; the balance budget counts these.
    rebalanced: BTreeSet<String>,
}

impl League {
    /// An empty league at season 1.
    pub fn new(config: LeagueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            season: 1,
            roster: Roster::new(),
            retired: Vec::new(),
            history: HistoryLedger::new(),
            rebalanced: BTreeSet::new(),
        })
    }

    /// A league with one generated card per name.
    ///
    /// ```
    /// use card_league::{League, LeagueConfig, DEFAULT_CARD_NAMES};
    ///
    /// let league = League::initialize(&DEFAULT_CARD_NAMES, LeagueConfig::default(), 7).unwrap();
    /// assert_eq!(league.roster().len(), DEFAULT_CARD_NAMES.len());
    /// ```
    pub fn initialize<S: AsRef<str>>(names: &[S], config: LeagueConfig, seed: u64) -> Result<Self> {
        let mut league = Self::new(config)?;
        let mut rng = LeagueRng::new(seed);
        league.roster = Roster::generate(names, &league.config.generation, &mut rng)?;
        info!(cards = league.roster.len(), seed, "league initialized");
        Ok(league)
    }

    #[must_use]
    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// The current season number, starting at 1.
    #[must_use]
    pub fn season(&self) -> u32 {
        self.season
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&Card> {
        self.roster.get(name)
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    #[must_use]
    pub fn retired(&self) -> &[RetiredCard] {
        &self.retired
    }

    #[must_use]
    pub fn standings(&self) -> StandingsSnapshot {
        StandingsSnapshot::from_roster(&self.roster, &self.config.rating)
    }

    /// Whether the current season already has a regular-season record.
    #[must_use]
    pub fn season_played(&self) -> bool {
        self.history.season(self.season).is_some()
    }

    pub fn simulate_season(&mut self, seed: u64) -> Result<Option<SeasonRecord>> {
        self.simulate_season_with(self.config.games_per_entity, seed)
    }

    /// Play the current season's regular season and record it.
    ///
    /// Returns `Ok(None)` for an empty roster, in which case nothing is
    /// recorded.
    pub fn simulate_season_with(
        &mut self,
        games_per_entity: u32,
        seed: u64,
    ) -> Result<Option<SeasonRecord>> {
        if self.season_played() {
            return Err(LeagueError::SeasonAlreadyRecorded { season: self.season });
        }
        if self.roster.is_empty() {
            return Ok(None);
        }

        let mut rng = LeagueRng::new(seed);
        let resolver = ContestResolver::new(&self.config.rating, &self.config.contest);
        let summary =
            SeasonSimulator::new(resolver).simulate(&mut self.roster, games_per_entity, &mut rng)?;

        let Some(leader) = summary.standings.leader() else {
            return Ok(None);
        };
        let record = SeasonRecord {
            season_number: self.season,
            champion: leader.name.clone(),
            champion_wins: leader.wins,
            champion_losses: leader.losses,
            champion_rating: leader.rating,
            games_played: summary.games_played,
            playoffs: None,
        };
        self.history.record_season(record.clone())?;

        for entry in summary.standings.iter() {
            self.history.record_performance(
                &entry.name,
                PerformancePoint {
                    season_number: self.season,
                    wins: entry.wins,
                    losses: entry.losses,
                    rating: entry.rating,
                },
            );
        }

        info!(
            season = self.season,
            champion = %record.champion,
            record = %record.champion_record(),
            "season recorded"
        );
        Ok(Some(record))
    }

    /// Play `count` exhibition contests. Records are kept, nothing is
    /// written to the ledger.
    pub fn play_exhibition(&mut self, count: u32, seed: u64) -> Result<Vec<(String, String)>> {
        let mut rng = LeagueRng::new(seed);
        let resolver = ContestResolver::new(&self.config.rating, &self.config.contest);
        SeasonSimulator::new(resolver).play_exhibition(&mut self.roster, count, &mut rng)
    }

    pub fn run_bracket(&mut self, seed: u64) -> Result<Option<BracketResults>> {
        let series = self.config.round_series_lengths.clone();
        self.run_bracket_with(self.config.playoff_field_size, &series, seed)
    }

    /// Run playoffs over the top `field_size` of the standings.
    ///
    /// Returns `Ok(None)` when fewer than two cards are live or the current
    /// season hasn't been simulated. When the roster is smaller than
    /// `field_size` the whole roster plays and the early rounds are
    /// dropped: the last `round_series_lengths` entries are used, so the
    /// final keeps its length.
    pub fn run_bracket_with(
        &mut self,
        field_size: usize,
        round_series_lengths: &[u32],
        seed: u64,
    ) -> Result<Option<BracketResults>> {
        if self.roster.len() < 2 {
            return Ok(None);
        }
        let Some(record) = self.history.season(self.season) else {
            return Ok(None);
        };
        if record.playoffs.is_some() {
            return Err(LeagueError::PlayoffsAlreadyCompleted { season: self.season });
        }

        let seeds = self.standings().seed_positions(field_size);
        let rounds = round_sizes(seeds.len()).len();
        let lengths = if seeds.len() < field_size && round_series_lengths.len() > rounds {
            &round_series_lengths[round_series_lengths.len() - rounds..]
        } else {
            round_series_lengths
        };

        let mut rng = LeagueRng::new(seed);
        let resolver = ContestResolver::new(&self.config.rating, &self.config.contest);
        let bracket = BracketResolver::new(resolver, self.config.bye_policy);

        let results = bracket.run(&mut self.roster, &seeds, lengths, &mut rng)?;
        if let Some(results) = &results {
            self.history.attach_playoffs(self.season, results.clone())?;
        }
        Ok(results)
    }

    /// Replace a card's attributes and log the change.
    ///
    /// Identical attributes are a no-op returning `Ok(None)`. Invalid
    /// attributes and an exhausted budget leave the card untouched. The
    /// budget counts distinct cards per season, so editing the same card
    /// twice costs one slot. A slot stays spent when its card retires.
    pub fn apply_balance_change(
        &mut self,
        name: &str,
        attributes: CardAttributes,
    ) -> Result<Option<BalanceChangeRecord>> {
        let card = self
            .roster
            .get(name)
            .ok_or_else(|| LeagueError::EntityNotFound { name: name.to_string() })?;
        attributes.validate(name)?;

        let changes = card.attributes().diff(&attributes);
        if changes.is_empty() {
            return Ok(None);
        }

        if let Some(limit) = self.config.max_balance_changes_per_season {
            if !self.rebalanced.contains(name) && self.rebalanced.len() >= limit {
                warn!(card = name, season = self.season, limit, "balance change refused");
                return Err(LeagueError::BalanceBudgetExhausted {
                    season: self.season,
                    limit,
                });
            }
        }

        let model = &self.config.rating;
        let before = card.attributes().clone();
        let rating_before = card.rating(model);

        let card = self
            .roster
            .get_mut(name)
            .ok_or_else(|| LeagueError::EntityNotFound { name: name.to_string() })?;
        card.apply_attribute_changes(attributes.clone())?;
        let rating_delta = card.rating(model) - rating_before;
        let direction = BalanceDirection::from_rating_delta(rating_delta);
        card.balance_direction = Some(direction);

        let record = BalanceChangeRecord {
            season_number: self.season,
            card: name.to_string(),
            before,
            after: attributes,
            changes,
            rating_delta,
            direction,
        };
        debug!(
            card = name,
            fields = record.changes.len(),
            rating_delta,
            direction = direction.short(),
            "balance change applied"
        );
        self.history.record_balance_change(record.clone());
        self.rebalanced.insert(name.to_string());
        Ok(Some(record))
    }

    /// Add a new card with a clean record.
    ///
    /// Names are never reused, retired ones included: history is keyed by
    /// name.
    pub fn add_entity(&mut self, name: impl Into<String>, attributes: CardAttributes) -> Result<&Card> {
        let name = name.into();
        if self.retired.iter().any(|r| r.card.name == name) {
            return Err(LeagueError::DuplicateEntity { name });
        }
        attributes.validate(&name)?;
        let card = self.roster.insert(Card::new(name, attributes))?;
        debug!(card = %card.name, season = self.season, "card added");
        Ok(card)
    }

    /// Remove a card from the roster.
    ///
    /// Under `RetirementPolicy::PurgeHistory` its performance series and
    /// balance records are dropped as well.
    pub fn retire_entity(&mut self, name: &str) -> Result<RetiredCard> {
        let card = self.roster.remove(name)?;
        let final_rating = card.rating(&self.config.rating);

        if self.config.retirement_policy == RetirementPolicy::PurgeHistory {
            self.history.purge_card(name);
        }

        let retired = RetiredCard {
            card,
            retired_in_season: self.season,
            final_rating,
        };
        info!(card = name, season = self.season, final_rating, "card retired");
        self.retired.push(retired.clone());
        Ok(retired)
    }

    /// Close the current season and return the new season number.
    ///
    /// Each card's grade is archived and its record, streak and balance
    /// label are cleared.
    pub fn rollover_season(&mut self) -> u32 {
        let model = &self.config.rating;
        for card in self.roster.iter_mut() {
            let grade = card.grade(model);
            card.grade_history.push(grade);
            card.reset_record();
            card.streak = 0;
            card.balance_direction = None;
        }
        self.rebalanced.clear();
        self.season += 1;
        info!(season = self.season, "season rollover");
        self.season
    }

    /// Awards for the current standings.
    #[must_use]
    pub fn awards(&self) -> SeasonAwards {
        let previous = self.season.checked_sub(1).filter(|s| *s >= 1);
        SeasonAwards::compute(
            &self.standings(),
            &self.history,
            previous,
            self.config.awards_team_size,
        )
    }

    /// Playoff titles per card, most first, ties by name.
    ///
    /// Retired cards are listed too; cards without a title are not.
    #[must_use]
    pub fn championship_table(&self) -> Vec<ChampionshipRow> {
        let live = self.roster.iter().map(|c| (c, false));
        let retired = self.retired.iter().map(|r| (&r.card, true));

        let mut rows: Vec<ChampionshipRow> = live
            .chain(retired)
            .filter(|(card, _)| card.championships > 0)
            .map(|(card, retired)| ChampionshipRow {
                name: card.name.clone(),
                championships: card.championships,
                retired,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.championships
                .cmp(&a.championships)
                .then_with(|| a.name.cmp(&b.name))
        });
        rows
    }

    #[must_use]
    pub fn snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            season: self.season,
            cards: self.roster.cards().to_vec(),
            retired: self.retired.clone(),
            history: self.history.clone(),
            rebalanced_this_season: self.rebalanced.clone(),
        }
    }

    /// Rebuild a league. The snapshot is fully checked first.
    pub fn from_snapshot(snapshot: LeagueSnapshot, config: LeagueConfig) -> Result<Self> {
        config.validate()?;
        if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(LeagueError::UnsupportedSchemaVersion {
                found: snapshot.schema_version,
                expected: SNAPSHOT_SCHEMA_VERSION,
            });
        }
        if snapshot.season == 0 {
            return Err(LeagueError::InvalidSnapshot("season numbers start at 1".into()));
        }
        snapshot.history.validate()?;
        if let Some(latest) = snapshot.history.latest_season() {
            if latest.season_number > snapshot.season {
                return Err(LeagueError::InvalidSnapshot(format!(
                    "season {} is recorded but the league is at season {}",
                    latest.season_number, snapshot.season
                )));
            }
        }
        let mut retired_names = BTreeSet::new();
        for retired in &snapshot.retired {
            retired.card.attributes().validate(&retired.card.name)?;
            if !retired_names.insert(retired.card.name.as_str()) {
                return Err(LeagueError::DuplicateEntity {
                    name: retired.card.name.clone(),
                });
            }
        }
        if let Some(card) = snapshot.cards.iter().find(|c| retired_names.contains(c.name.as_str())) {
            return Err(LeagueError::DuplicateEntity {
                name: card.name.clone(),
            });
        }
        let roster = Roster::from_cards(snapshot.cards)?;

        Ok(Self {
            config,
            season: snapshot.season,
            roster,
            retired: snapshot.retired,
            history: snapshot.history,
            rebalanced: snapshot.rebalanced_this_season,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contest::ContestConfig;
    use crate::rating::Grade;

    fn quiet_config() -> LeagueConfig {
        LeagueConfig::default()
            .with_games_per_entity(4)
            .with_playoffs(4, vec![1, 1])
            .with_contest(ContestConfig::deterministic())
    }

    fn small_league() -> League {
        let mut league = League::new(quiet_config()).unwrap();
        league.add_entity("Golem", CardAttributes::new(1000, 1.2, 8, 2300)).unwrap();
        league.add_entity("Knight", CardAttributes::new(700, 1.5, 5, 1800)).unwrap();
        league.add_entity("Goblin", CardAttributes::new(400, 2.0, 3, 1300)).unwrap();
        league.add_entity("Skeleton", CardAttributes::new(150, 2.8, 1, 950)).unwrap();
        league
    }

    #[test]
    fn test_initialize() {
        let league = League::initialize(&["A", "B", "C"], LeagueConfig::default(), 3).unwrap();
        assert_eq!(league.season(), 1);
        assert_eq!(league.roster().len(), 3);
        assert_eq!(league.history().season_count(), 0);

        let again = League::initialize(&["A", "B", "C"], LeagueConfig::default(), 3).unwrap();
        assert_eq!(league, again);

        assert!(matches!(
            League::initialize(&["A", "A"], LeagueConfig::default(), 3),
            Err(LeagueError::DuplicateEntity { .. })
        ));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = LeagueConfig::default().with_playoffs(4, vec![2, 1]);
        assert!(League::new(config).is_err());
    }

    #[test]
    fn test_simulate_season_records_once() {
        let mut league = small_league();
        let record = league.simulate_season(1).unwrap().unwrap();

        assert_eq!(record.season_number, 1);
        assert_eq!(record.champion, league.standings().leader().unwrap().name);
        assert_eq!(record.games_played, 16);
        assert_eq!(league.history().performance("Knight").len(), 1);

        assert!(matches!(
            league.simulate_season(2),
            Err(LeagueError::SeasonAlreadyRecorded { season: 1 })
        ));
    }

    #[test]
    fn test_empty_league_records_nothing() {
        let mut league = League::new(LeagueConfig::default()).unwrap();
        assert!(league.simulate_season(1).unwrap().is_none());
        assert_eq!(league.history().season_count(), 0);
        assert!(league.run_bracket(1).unwrap().is_none());
    }

    #[test]
    fn test_bracket_requires_played_season() {
        let mut league = small_league();
        assert!(league.run_bracket(1).unwrap().is_none());

        league.simulate_season(1).unwrap();
        let results = league.run_bracket(2).unwrap().unwrap();
        assert_eq!(results.champion, "Golem");
        assert_eq!(league.card("Golem").unwrap().championships, 1);
        assert!(league.history().season(1).unwrap().playoffs.is_some());

        assert!(matches!(
            league.run_bracket(3),
            Err(LeagueError::PlayoffsAlreadyCompleted { season: 1 })
        ));
    }

    #[test]
    fn test_balance_change_labels_by_rating() {
        let mut league = small_league();
        let mut stronger = league.card("Goblin").unwrap().attributes().clone();
        stronger.attack_power += 200;
        stronger.range -= 1;

        let record = league.apply_balance_change("Goblin", stronger.clone()).unwrap().unwrap();
        assert_eq!(record.direction, BalanceDirection::Buff);
        assert!(record.rating_delta > 0.0);
        assert_eq!(record.changes.len(), 2);
        assert_eq!(league.card("Goblin").unwrap().balance_direction, Some(BalanceDirection::Buff));

        // Same attributes again: nothing to record
        assert!(league.apply_balance_change("Goblin", stronger).unwrap().is_none());
        assert_eq!(league.history().balance_change_count(), 1);
    }

    #[test]
    fn test_balance_change_rejections_leave_card_untouched() {
        let mut league = small_league();
        let before = league.card("Knight").unwrap().clone();

        let mut broken = before.attributes().clone();
        broken.health = 0;
        assert!(matches!(
            league.apply_balance_change("Knight", broken),
            Err(LeagueError::InvalidAttributes { .. })
        ));
        assert!(matches!(
            league.apply_balance_change("Nobody", before.attributes().clone()),
            Err(LeagueError::EntityNotFound { .. })
        ));
        assert_eq!(league.card("Knight").unwrap(), &before);
        assert_eq!(league.history().balance_change_count(), 0);
    }

    #[test]
    fn test_balance_budget_counts_distinct_cards() {
        let mut league = League::new(quiet_config().with_balance_limit(Some(2))).unwrap();
        for name in ["A", "B", "C"] {
            league.add_entity(name, CardAttributes::new(500, 1.5, 3, 1500)).unwrap();
        }

        let buffed = CardAttributes::new(600, 1.5, 3, 1500);
        let buffed_more = CardAttributes::new(700, 1.5, 3, 1500);
        league.apply_balance_change("A", buffed.clone()).unwrap();
        league.apply_balance_change("A", buffed_more).unwrap();
        league.apply_balance_change("B", buffed.clone()).unwrap();

        assert!(matches!(
            league.apply_balance_change("C", buffed.clone()),
            Err(LeagueError::BalanceBudgetExhausted { season: 1, limit: 2 })
        ));

        league.rollover_season();
        assert!(league.apply_balance_change("C", buffed).unwrap().is_some());
    }

    #[test]
    fn test_rollover() {
        let mut league = small_league();
        league.simulate_season(1).unwrap();
        let mut weaker = league.card("Golem").unwrap().attributes().clone();
        weaker.health -= 500;
        league.apply_balance_change("Golem", weaker).unwrap();

        assert_eq!(league.rollover_season(), 2);

        let golem = league.card("Golem").unwrap();
        assert_eq!((golem.wins, golem.losses, golem.streak), (0, 0, 0));
        assert_eq!(golem.balance_direction, None);
        assert_eq!(golem.grade_history.len(), 1);
        assert_eq!(league.card("Skeleton").unwrap().grade_history, vec![Grade::F]);

        assert!(league.simulate_season(2).unwrap().is_some());
    }

    #[test]
    fn test_add_entity_validation() {
        let mut league = small_league();
        assert!(matches!(
            league.add_entity("Knight", CardAttributes::new(100, 1.0, 1, 1000)),
            Err(LeagueError::DuplicateEntity { .. })
        ));
        assert!(matches!(
            league.add_entity("Ghost", CardAttributes::new(100, f64::NAN, 1, 1000)),
            Err(LeagueError::InvalidAttributes { .. })
        ));
        assert_eq!(league.roster().len(), 4);
    }

    #[test]
    fn test_retirement_policies() {
        let mut retain = small_league();
        retain.simulate_season(1).unwrap();
        let retired = retain.retire_entity("Goblin").unwrap();
        assert_eq!(retired.retired_in_season, 1);
        assert!(retired.final_rating > 0.0);
        assert!(retain.card("Goblin").is_none());
        assert_eq!(retain.history().performance("Goblin").len(), 1);
        assert_eq!(retain.retired().len(), 1);

        let mut purge = League::new(quiet_config().with_retirement_policy(RetirementPolicy::PurgeHistory)).unwrap();
        purge.add_entity("Golem", CardAttributes::new(1000, 1.2, 8, 2300)).unwrap();
        purge.add_entity("Goblin", CardAttributes::new(400, 2.0, 3, 1300)).unwrap();
        purge.simulate_season(1).unwrap();
        purge.retire_entity("Golem").unwrap();

        assert!(purge.history().performance("Golem").is_empty());
        assert_eq!(purge.history().season(1).unwrap().champion, "Golem");

        assert!(matches!(
            purge.retire_entity("Golem"),
            Err(LeagueError::EntityNotFound { .. })
        ));
    }

    #[test]
    fn test_championship_table() {
        let mut league = small_league();
        league.simulate_season(1).unwrap();
        league.run_bracket(1).unwrap();
        league.rollover_season();
        league.simulate_season(2).unwrap();
        league.run_bracket(2).unwrap();
        league.retire_entity("Golem").unwrap();

        let table = league.championship_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].name, "Golem");
        assert_eq!(table[0].championships, 2);
        assert!(table[0].retired);
    }

    #[test]
    fn test_awards() {
        let mut league = small_league();
        league.simulate_season(1).unwrap();
        let awards = league.awards();

        assert_eq!(awards.mvp, league.standings().leader().map(|e| e.name.clone()));
        assert_eq!(awards.all_league_team.len(), 4);
        assert!(awards.most_improved.is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut league = small_league();
        league.simulate_season(1).unwrap();
        league.run_bracket(1).unwrap();
        league.retire_entity("Skeleton").unwrap();

        let json = league.snapshot().to_json().unwrap();
        let restored =
            League::from_snapshot(LeagueSnapshot::from_json(&json).unwrap(), quiet_config()).unwrap();
        assert_eq!(restored, league);
    }

    #[test]
    fn test_snapshot_validation() {
        let league = small_league();

        let mut duplicate = league.snapshot();
        duplicate.cards.push(duplicate.cards[0].clone());
        assert!(matches!(
            League::from_snapshot(duplicate, quiet_config()),
            Err(LeagueError::DuplicateEntity { .. })
        ));

        let mut zero = league.snapshot();
        zero.season = 0;
        assert!(matches!(
            League::from_snapshot(zero, quiet_config()),
            Err(LeagueError::InvalidSnapshot(_))
        ));

        let mut future = league.snapshot();
        future.schema_version = 9;
        assert!(matches!(
            League::from_snapshot(future, quiet_config()),
            Err(LeagueError::UnsupportedSchemaVersion { found: 9, .. })
        ));

        let mut reused = league.snapshot();
        let mut ghost = reused.cards[0].clone();
        ghost.championships = 1;
        reused.retired.push(RetiredCard {
            card: ghost,
            retired_in_season: 1,
            final_rating: 90.0,
        });
        assert!(matches!(
            League::from_snapshot(reused, quiet_config()),
            Err(LeagueError::DuplicateEntity { .. })
        ));
    }

    #[test]
    fn test_retired_name_cannot_return() {
        let mut league = small_league();
        league.simulate_season(1).unwrap();
        league.retire_entity("Knight").unwrap();
        league.rollover_season();

        assert!(matches!(
            league.add_entity("Knight", CardAttributes::new(300, 2.5, 2, 1000)),
            Err(LeagueError::DuplicateEntity { .. })
        ));
        league.simulate_season(2).unwrap();

        let series = league.history().performance("Knight");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].season_number, 1);
    }

    #[test]
    fn test_purge_keeps_balance_slot_spent() {
        let config = quiet_config()
            .with_balance_limit(Some(1))
            .with_retirement_policy(RetirementPolicy::PurgeHistory);
        let mut league = League::new(config).unwrap();
        league.add_entity("Knight", CardAttributes::new(500, 1.5, 3, 1500)).unwrap();
        league.add_entity("Giant", CardAttributes::new(500, 1.5, 3, 1500)).unwrap();

        let buffed = CardAttributes::new(600, 1.5, 3, 1500);
        league.apply_balance_change("Knight", buffed.clone()).unwrap();
        assert!(league.apply_balance_change("Giant", buffed.clone()).is_err());

        league.retire_entity("Knight").unwrap();
        assert_eq!(league.history().balance_change_count(), 0);
        assert!(matches!(
            league.apply_balance_change("Giant", buffed.clone()),
            Err(LeagueError::BalanceBudgetExhausted { season: 1, limit: 1 })
        ));

        // The spent slot survives a save and reload
        let mut restored = League::from_snapshot(league.snapshot(), league.config().clone()).unwrap();
        assert!(restored.apply_balance_change("Giant", buffed.clone()).is_err());

        restored.rollover_season();
        assert!(restored.apply_balance_change("Giant", buffed).unwrap().is_some());
    }

    #[test]
    fn test_short_roster_uses_final_rounds() {
        let config = quiet_config().with_playoffs(8, vec![1, 3, 5]);
        let mut league = League::new(config).unwrap();
        league.add_entity("Golem", CardAttributes::new(1000, 1.2, 8, 2300)).unwrap();
        league.add_entity("Knight", CardAttributes::new(700, 1.5, 5, 1800)).unwrap();
        league.add_entity("Goblin", CardAttributes::new(400, 2.0, 3, 1300)).unwrap();
        league.add_entity("Skeleton", CardAttributes::new(150, 2.8, 1, 950)).unwrap();
        league.simulate_season(1).unwrap();

        let results = league.run_bracket(1).unwrap().unwrap();
        let lengths: Vec<u32> = results.rounds.iter().map(|r| r.best_of).collect();
        assert_eq!(lengths, vec![3, 5]);
        assert_eq!(results.champion, "Golem");
    }
}
