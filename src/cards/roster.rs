//! The roster: sole owner of every live card.
//!
//! Cards are kept in insertion order (the order ties fall back to in
//! standings) with a name index for O(1) lookup.
//!
//! ## Example
//!
//! ```
//! use card_league::cards::{Card, CardAttributes, Roster};
//!
//! let mut roster = Roster::new();
//! roster.insert(Card::new("Knight", CardAttributes::new(600, 1.2, 1, 1700))).unwrap();
//!
//! assert!(roster.contains("Knight"));
//! assert!(roster.insert(Card::new("Knight", CardAttributes::new(1, 1.0, 1, 1))).is_err());
//! ```
//!
//! Live cards are only mutated inside the crate, so a name can't drift
//! away from its index entry:
//!
//! ```compile_fail
//! use card_league::cards::{Card, CardAttributes, Roster};
//!
//! let mut roster = Roster::new();
//! roster.insert(Card::new("Knight", CardAttributes::new(600, 1.2, 1, 1700))).unwrap();
//! roster.get_mut("Knight").unwrap().name = "Giant".into();
//! ```

use rustc_hash::FxHashMap;

use super::card::Card;
use super::generation::GenerationConfig;
use crate::core::{LeagueError, LeagueRng, Result};

#[derive(Clone, Debug, Default)]
pub struct Roster {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from `cards`
        self.cards == other.cards
    }
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster of freshly generated cards, one per name.
    ///
    /// Fails on the first duplicate name.
    pub fn generate<S: AsRef<str>>(
        names: &[S],
        config: &GenerationConfig,
        rng: &mut LeagueRng,
    ) -> Result<Self> {
        config.validate()?;
        let mut roster = Self::new();
        for name in names {
            roster.insert(Card::generate(name.as_ref(), config, rng))?;
        }
        Ok(roster)
    }

    /// Build a roster from existing cards, validating names and attributes.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut roster = Self::new();
        for card in cards {
            card.attributes().validate(&card.name)?;
            roster.insert(card)?;
        }
        Ok(roster)
    }

    /// Add a card at the end of the roster.
    pub fn insert(&mut self, card: Card) -> Result<&Card> {
        if self.index.contains_key(&card.name) {
            return Err(LeagueError::DuplicateEntity { name: card.name });
        }
        let position = self.cards.len();
        self.index.insert(card.name.clone(), position);
        self.cards.push(card);
        Ok(&self.cards[position])
    }

    /// Remove a card, keeping the relative order of the rest.
    pub fn remove(&mut self, name: &str) -> Result<Card> {
        let position = self.position(name)?;
        let card = self.cards.remove(position);
        self.reindex();
        Ok(card)
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, card) in self.cards.iter().enumerate() {
            self.index.insert(card.name.clone(), i);
        }
    }

    /// Position of a card in insertion order.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.index.get(name).copied().ok_or_else(|| LeagueError::EntityNotFound {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.index.get(name).map(|&i| &self.cards[i])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Card> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.cards[i]),
            None => None,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    #[must_use]
    pub fn card_at(&self, position: usize) -> &Card {
        &self.cards[position]
    }

    /// Mutable access to two distinct cards at once.
    pub(crate) fn pair_mut(&mut self, first: usize, second: usize) -> Result<(&mut Card, &mut Card)> {
        if first == second {
            return Err(LeagueError::InvalidMatchup {
                name: self.cards[first].name.clone(),
            });
        }
        if first < second {
            let (left, right) = self.cards.split_at_mut(second);
            Ok((&mut left[first], &mut right[0]))
        } else {
            let (left, right) = self.cards.split_at_mut(first);
            Ok((&mut right[0], &mut left[second]))
        }
    }

    /// Draw an opponent for the card at `position` uniformly from the others.
    ///
    /// Fails with `EmptyRoster` when there is nobody else to play.
    pub fn draw_opponent(&self, position: usize, rng: &mut LeagueRng) -> Result<usize> {
        if self.cards.len() < 2 {
            return Err(LeagueError::EmptyRoster);
        }
        let pick = rng.gen_index(self.cards.len() - 1);
        Ok(if pick >= position { pick + 1 } else { pick })
    }

    /// Draw two distinct cards uniformly.
    pub fn draw_pair(&self, rng: &mut LeagueRng) -> Result<(usize, usize)> {
        if self.cards.len() < 2 {
            return Err(LeagueError::EmptyRoster);
        }
        let first = rng.gen_index(self.cards.len());
        let second = self.draw_opponent(first, rng)?;
        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardAttributes;

    fn card(name: &str) -> Card {
        Card::new(name, CardAttributes::new(500, 1.5, 3, 1500))
    }

    fn roster(names: &[&str]) -> Roster {
        Roster::from_cards(names.iter().map(|n| card(n))).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let roster = roster(&["Knight", "Archers"]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("Archers").unwrap().name, "Archers");
        assert!(roster.get("Giant").is_none());
        assert_eq!(roster.position("Archers").unwrap(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut roster = roster(&["Knight"]);
        let err = roster.insert(card("Knight")).unwrap_err();
        assert!(matches!(err, LeagueError::DuplicateEntity { name } if name == "Knight"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut roster = roster(&["A", "B", "C", "D"]);
        let removed = roster.remove("B").unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<_> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        assert_eq!(roster.position("D").unwrap(), 2);
        assert!(matches!(
            roster.remove("B"),
            Err(LeagueError::EntityNotFound { .. })
        ));
    }

    #[test]
    fn test_pair_mut() {
        let mut roster = roster(&["A", "B", "C"]);

        let (c, a) = roster.pair_mut(2, 0).unwrap();
        assert_eq!(c.name, "C");
        assert_eq!(a.name, "A");

        assert!(matches!(
            roster.pair_mut(1, 1),
            Err(LeagueError::InvalidMatchup { .. })
        ));
    }

    #[test]
    fn test_draw_opponent_never_self() {
        let roster = roster(&["A", "B", "C"]);
        let mut rng = LeagueRng::new(42);
        for position in 0..3 {
            for _ in 0..100 {
                let opponent = roster.draw_opponent(position, &mut rng).unwrap();
                assert_ne!(opponent, position);
                assert!(opponent < 3);
            }
        }
    }

    #[test]
    fn test_draw_requires_two_cards() {
        let roster = roster(&["Solo"]);
        let mut rng = LeagueRng::new(1);
        assert!(matches!(
            roster.draw_opponent(0, &mut rng),
            Err(LeagueError::EmptyRoster)
        ));
        assert!(Roster::new().draw_pair(&mut rng).is_err());
    }

    #[test]
    fn test_generate() {
        let mut rng = LeagueRng::new(42);
        let roster = Roster::generate(&["A", "B", "C"], &GenerationConfig::default(), &mut rng).unwrap();
        assert_eq!(roster.len(), 3);

        let mut rng = LeagueRng::new(42);
        let again = Roster::generate(&["A", "B", "C"], &GenerationConfig::default(), &mut rng).unwrap();
        assert_eq!(roster, again);

        let mut rng = LeagueRng::new(42);
        assert!(Roster::generate(&["A", "A"], &GenerationConfig::default(), &mut rng).is_err());
    }
}
