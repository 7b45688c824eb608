use crate::{CardRef, RngState};
use serde::Serialize;
use thiserror::Error;

/// Upper bound on copies of one card in a single deck entry.
pub const MAX_ENTRY_COUNT: i64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("invalid count {count} for card {code}")]
    InvalidCount { code: String, count: i64 },
}

#[derive(Debug, Clone)]
pub struct DeckEntry {
    pub card: CardRef,
    pub count: i64,
}

impl DeckEntry {
    pub fn new(card: CardRef, count: i64) -> Self {
        Self { card, count }
    }
}

/// A deck list as supplied by the player, consumed once at construction.
#[derive(Debug, Clone, Default)]
pub struct DeckDefinition {
    pub faction: Option<String>,
    pub agenda: Option<String>,
    pub draw_cards: Vec<DeckEntry>,
    pub plot_cards: Vec<DeckEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct CardPools {
    pub draw_cards: Vec<CardRef>,
    pub plot_cards: Vec<CardRef>,
}

impl CardPools {
    pub fn materialize(deck: &DeckDefinition) -> Result<Self, DeckError> {
        Ok(Self {
            draw_cards: expand(&deck.draw_cards)?,
            plot_cards: expand(&deck.plot_cards)?,
        })
    }
}

fn expand(entries: &[DeckEntry]) -> Result<Vec<CardRef>, DeckError> {
    let mut cards = Vec::new();
    for entry in entries {
        if !(0..=MAX_ENTRY_COUNT).contains(&entry.count) {
            return Err(DeckError::InvalidCount {
                code: entry.card.code().to_string(),
                count: entry.count,
            });
        }
        for _ in 0..entry.count {
            cards.push(entry.card.clone());
        }
    }
    Ok(cards)
}

/// Remaining draw pile. The front of the pile is the next card drawn.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrawDeck {
    cards: Vec<CardRef>,
}

impl DrawDeck {
    pub fn shuffled(pool: &[CardRef], rng: &mut RngState) -> Self {
        Self {
            cards: rng.shuffled(pool),
        }
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<CardRef> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }
}

/// Ordered hand. Removal by code takes the earliest matching entry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<CardRef>,
}

impl Hand {
    pub fn contains(&self, code: &str) -> bool {
        self.cards.iter().any(|card| card.code() == code)
    }

    pub fn extend(&mut self, cards: Vec<CardRef>) {
        self.cards.extend(cards);
    }

    pub fn first(&self, code: &str) -> Option<&CardRef> {
        self.cards.iter().find(|card| card.code() == code)
    }

    pub fn remove_first(&mut self, code: &str) -> Option<CardRef> {
        let idx = self.cards.iter().position(|card| card.code() == code)?;
        Some(self.cards.remove(idx))
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardDef, CardType};

    fn card(code: &str) -> CardRef {
        CardRef::new(CardDef::new(code, CardType::Character, 1))
    }

    #[test]
    fn materialize_repeats_by_count() {
        let deck = DeckDefinition {
            draw_cards: vec![
                DeckEntry::new(card("a"), 3),
                DeckEntry::new(card("b"), 0),
                DeckEntry::new(card("c"), 1),
            ],
            plot_cards: vec![DeckEntry::new(card("p"), 2)],
            ..DeckDefinition::default()
        };
        let pools = CardPools::materialize(&deck).expect("materialize");
        let codes: Vec<&str> = pools.draw_cards.iter().map(CardRef::code).collect();
        assert_eq!(codes, vec!["a", "a", "a", "c"]);
        assert_eq!(pools.plot_cards.len(), 2);
    }

    #[test]
    fn negative_count_is_rejected() {
        let deck = DeckDefinition {
            plot_cards: vec![DeckEntry::new(card("p"), -1)],
            ..DeckDefinition::default()
        };
        assert_eq!(
            CardPools::materialize(&deck).err(),
            Some(DeckError::InvalidCount {
                code: "p".to_string(),
                count: -1,
            })
        );
    }

    #[test]
    fn oversized_count_is_rejected() {
        let deck = DeckDefinition {
            draw_cards: vec![
                DeckEntry::new(card("a"), MAX_ENTRY_COUNT),
                DeckEntry::new(card("b"), i64::MAX),
            ],
            ..DeckDefinition::default()
        };
        assert_eq!(
            CardPools::materialize(&deck).err(),
            Some(DeckError::InvalidCount {
                code: "b".to_string(),
                count: i64::MAX,
            })
        );
    }

    #[test]
    fn draw_takes_from_front_and_stops_when_empty() {
        let pool = vec![card("a"), card("b"), card("c")];
        let mut deck = DrawDeck::shuffled(&pool, &mut RngState::from_seed(5));
        let order: Vec<String> = deck.cards().iter().map(|c| c.code.clone()).collect();
        let first = deck.draw_cards(2);
        assert_eq!(first[0].code, order[0]);
        assert_eq!(first[1].code, order[1]);
        assert_eq!(deck.draw_cards(5).len(), 1);
        assert!(deck.is_empty());
        assert!(deck.draw_cards(1).is_empty());
    }

    #[test]
    fn hand_removes_first_match_only() {
        let mut hand = Hand::default();
        hand.extend(vec![card("a"), card("b"), card("a")]);
        let first = hand.first("a").cloned();
        assert!(hand.remove_first("a").is_some());
        assert_eq!(hand.first("a"), first.as_ref());
        let codes: Vec<&str> = hand.cards().iter().map(CardRef::code).collect();
        assert_eq!(codes, vec!["b", "a"]);
        assert!(hand.remove_first("z").is_none());
    }
}
