use super::*;
use crate::rules::{self, PlayRejection};
use crate::{Event, EventBus};

impl PlayerState {
    pub fn can_play_card(&self, card: &CardRef) -> bool {
        self.check_play(card).is_ok()
    }

    /// Checks the card as given, then the copy actually held in hand, which
    /// is the one that gets paid for.
    pub(crate) fn check_play(&self, card: &CardRef) -> Result<(), PlayRejection> {
        self.check_rules(card)?;
        let held = self
            .hand
            .first(card.code())
            .ok_or(PlayRejection::NotInHand)?;
        self.check_rules(held)
    }

    fn check_rules(&self, card: &CardRef) -> Result<(), PlayRejection> {
        rules::check_play(
            self.phase,
            &self.hand,
            &self.cards_in_play,
            self.resources.gold,
            self.limited_played,
            &self.config.limited_marker,
            card,
        )
    }

    pub fn is_duplicate_in_play(&self, card: &CardRef) -> bool {
        rules::is_duplicate_in_play(&self.cards_in_play, card)
    }

    /// Puts a card from hand into play face down. Returns false and leaves
    /// the state untouched when the play is not currently legal.
    pub fn play_card(&mut self, card: &CardRef, events: &mut EventBus) -> bool {
        if let Err(reason) = self.check_play(card) {
            log::debug!("player {}: play {} rejected: {reason}", self.id, card.code());
            return false;
        }
        let Some(played) = self.hand.remove_first(card.code()) else {
            return false;
        };

        let duplicate = self.is_duplicate_in_play(&played);
        let cost_paid = if duplicate { 0 } else { played.cost };
        self.resources.gold -= cost_paid;
        if rules::is_limited(&played, &self.config.limited_marker) {
            self.limited_played = true;
        }

        log::debug!(
            "player {}: played {} for {cost_paid}, {} gold left",
            self.id,
            played.code(),
            self.resources.gold
        );
        events.push(Event::CardPlayed {
            code: played.code().to_string(),
            cost_paid,
            duplicate,
        });
        self.cards_in_play.push(PlayedCard::face_down(played));
        true
    }

    /// Only records completion; moving on to the plot phase is the caller's call.
    pub fn setup_done(&mut self, events: &mut EventBus) {
        self.setup_complete = true;
        log::debug!("player {}: setup done", self.id);
        events.push(Event::SetupDone);
    }
}
