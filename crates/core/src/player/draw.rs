use super::*;
use crate::{Event, EventBus};

impl PlayerState {
    /// Reshuffles the full draw pool, empties the hand and deals a fresh one.
    pub fn init_draw_deck(&mut self) -> usize {
        self.draw_deck = DrawDeck::shuffled(&self.pools.draw_cards, &mut self.rng);
        self.hand.clear();
        self.draw_cards_to_hand(self.config.starting_hand_size)
    }

    /// Moves up to `count` cards from the top of the draw pile into the hand.
    /// An empty pile simply yields fewer cards.
    pub fn draw_cards_to_hand(&mut self, count: usize) -> usize {
        let drawn = self.draw_deck.draw_cards(count);
        let total = drawn.len();
        log::trace!(
            "player {}: drew {total}/{count}, {} left in deck",
            self.id,
            self.draw_deck.len()
        );
        self.hand.extend(drawn);
        total
    }

    pub fn draw_phase(&mut self, events: &mut EventBus) {
        if self.phase != Phase::Plot {
            log::debug!("player {}: draw phase entered from {:?}", self.id, self.phase);
        }
        self.phase = Phase::Draw;
        events.push(Event::DrawPhaseStarted);
        let drawn = self.draw_cards_to_hand(self.config.draw_phase_cards);
        events.push(Event::CardsDrawn { count: drawn });
    }
}
