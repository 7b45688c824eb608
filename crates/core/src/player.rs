use crate::{
    CardPools, CardRef, DeckDefinition, DeckError, DrawDeck, Hand, Phase, PlayedCard, PlotDeck,
    Prompt, Resources, RngState, RulesConfig, SelectedPlot,
};
use thiserror::Error;

mod draw;
mod opening;
mod plot;
mod setup;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("no plot selected")]
    NoPlotSelected,
    #[error("invalid deck: {0}")]
    Deck(#[from] DeckError),
}

/// Authoritative state of one player for the duration of a match.
#[derive(Debug)]
pub struct PlayerState {
    pub id: String,
    pub faction: Option<String>,
    pub agenda: Option<String>,
    pub config: RulesConfig,
    pub resources: Resources,
    pub phase: Phase,
    pub prompt: Prompt,
    pub taken_mulligan: bool,
    pub ready_to_start: bool,
    pub limited_played: bool,
    pub first_player: bool,
    pub setup_complete: bool,
    pools: CardPools,
    rng: RngState,
    draw_deck: DrawDeck,
    hand: Hand,
    plots: PlotDeck,
    cards_in_play: Vec<PlayedCard>,
}

impl PlayerState {
    pub fn new(
        session_id: &str,
        deck: &DeckDefinition,
        rng: RngState,
    ) -> Result<Self, PlayerError> {
        Self::with_config(session_id, deck, rng, RulesConfig::default())
    }

    pub fn with_config(
        session_id: &str,
        deck: &DeckDefinition,
        rng: RngState,
        config: RulesConfig,
    ) -> Result<Self, PlayerError> {
        let pools = CardPools::materialize(deck)?;
        let id = player_id(session_id);
        log::debug!(
            "player {id}: {} draw cards, {} plots (seed {})",
            pools.draw_cards.len(),
            pools.plot_cards.len(),
            rng.seed()
        );
        Ok(Self {
            id,
            faction: deck.faction.clone(),
            agenda: deck.agenda.clone(),
            config,
            resources: Resources::default(),
            phase: Phase::None,
            prompt: Prompt::default(),
            taken_mulligan: false,
            ready_to_start: false,
            limited_played: false,
            first_player: false,
            setup_complete: false,
            pools,
            rng,
            draw_deck: DrawDeck::default(),
            hand: Hand::default(),
            plots: PlotDeck::default(),
            cards_in_play: Vec::new(),
        })
    }

    pub fn draw_cards(&self) -> &[CardRef] {
        &self.pools.draw_cards
    }

    pub fn plot_cards(&self) -> &[CardRef] {
        &self.pools.plot_cards
    }

    pub fn draw_deck(&self) -> &DrawDeck {
        &self.draw_deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn plot_deck(&self) -> &[CardRef] {
        self.plots.deck()
    }

    pub fn plot_discard(&self) -> &[CardRef] {
        self.plots.discard()
    }

    pub fn selected_plot(&self) -> Option<&SelectedPlot> {
        self.plots.selected()
    }

    pub fn cards_in_play(&self) -> &[PlayedCard] {
        &self.cards_in_play
    }

    pub fn gold(&self) -> i64 {
        self.resources.gold
    }
}

/// Session ids carry a two character namespace prefix.
fn player_id(session_id: &str) -> String {
    session_id.chars().skip(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardDef, CardType, DeckEntry};

    #[test]
    fn id_strips_session_prefix() {
        assert_eq!(player_id("/#abc123"), "abc123");
        assert_eq!(player_id("ab"), "");
        assert_eq!(player_id("x"), "");
    }

    #[test]
    fn invalid_deck_produces_no_player() {
        let card = CardRef::new(CardDef::new("a", CardType::Character, 1));
        let deck = DeckDefinition {
            draw_cards: vec![DeckEntry::new(card, -2)],
            ..DeckDefinition::default()
        };
        let err = PlayerState::new("/#p1", &deck, RngState::from_seed(1)).err();
        assert!(matches!(err, Some(PlayerError::Deck(_))));
    }
}
