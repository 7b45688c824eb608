use super::*;
use crate::{
    Button, Event, EventBus, KEEP_OR_MULLIGAN_TITLE, SELECT_SETUP_TITLE,
    WAITING_FOR_OPPONENT_TITLE,
};

impl PlayerState {
    pub fn initialise(&mut self, events: &mut EventBus) {
        let dealt = self.init_draw_deck();
        self.plots.reset(&self.pools.plot_cards);

        self.resources.reset();
        self.ready_to_start = false;
        self.limited_played = false;
        self.setup_complete = false;
        self.cards_in_play.clear();

        self.prompt.set(KEEP_OR_MULLIGAN_TITLE, Prompt::keep_or_mulligan());
        log::debug!("player {}: initialised with {dealt} cards in hand", self.id);
        events.push(Event::HandDealt {
            count: dealt,
            mulligan: false,
        });
    }

    pub fn keep(&mut self, events: &mut EventBus) {
        self.ready_to_start = true;
        self.prompt.set(WAITING_FOR_OPPONENT_TITLE, Vec::new());
        log::debug!("player {}: kept hand", self.id);
        events.push(Event::HandKept);
    }

    /// Reshuffles and redeals the opening hand. Only the first call counts.
    pub fn mulligan(&mut self, events: &mut EventBus) -> bool {
        if self.taken_mulligan {
            log::debug!("player {}: mulligan ignored, already taken", self.id);
            return false;
        }

        let dealt = self.init_draw_deck();
        self.taken_mulligan = true;
        self.ready_to_start = true;
        self.prompt.set(WAITING_FOR_OPPONENT_TITLE, Vec::new());
        log::debug!("player {}: mulligan, redealt {dealt}", self.id);
        events.push(Event::HandDealt {
            count: dealt,
            mulligan: true,
        });
        true
    }

    pub fn start_game(&mut self, events: &mut EventBus) -> bool {
        if !self.ready_to_start {
            log::debug!("player {}: start ignored, hand not settled", self.id);
            return false;
        }

        self.resources.gold = self.config.setup_gold;
        self.phase = Phase::Setup;
        self.prompt
            .set(SELECT_SETUP_TITLE, vec![Button::new("setupdone", "Done")]);
        log::debug!("player {}: setup with {} gold", self.id, self.resources.gold);
        events.push(Event::GameStarted {
            gold: self.resources.gold,
        });
        true
    }
}
