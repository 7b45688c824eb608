use super::*;
use crate::{Button, Event, EventBus, CHOOSE_PLOT_TITLE};

impl PlayerState {
    pub fn start_plot_phase(&mut self, events: &mut EventBus) {
        if !self.setup_complete && self.phase == Phase::Setup {
            log::debug!("player {}: plot phase started before setup done", self.id);
        }
        self.phase = Phase::Plot;
        self.prompt
            .set(CHOOSE_PLOT_TITLE, vec![Button::new("selectplot", "Done")]);

        self.resources.reset();
        self.first_player = false;
        self.limited_played = false;
        self.plots.clear_selection();
        for played in &mut self.cards_in_play {
            played.face_down = false;
        }

        log::debug!("player {}: plot phase", self.id);
        events.push(Event::PlotPhaseStarted);
    }

    /// Tentatively chooses a plot; it stays in the plot deck until revealed.
    pub fn select_plot(&mut self, card: &CardRef, events: &mut EventBus) -> bool {
        if !matches!(self.phase, Phase::Plot | Phase::Draw) {
            log::debug!(
                "player {}: plot {} selected in phase {:?}",
                self.id,
                card.code(),
                self.phase
            );
            return false;
        }
        if !self.plots.select(card) {
            log::debug!("player {}: plot {} not in plot deck", self.id, card.code());
            return false;
        }
        events.push(Event::PlotSelected);
        true
    }

    pub fn reveal_plots(&mut self, events: &mut EventBus) -> Result<(), PlayerError> {
        let revealed = self.plots.reveal().ok_or(PlayerError::NoPlotSelected)?;

        self.prompt.clear();
        let missing = self
            .config
            .starting_hand_size
            .saturating_sub(self.hand.len());
        let drawn = self.draw_cards_to_hand(missing);

        log::debug!(
            "player {}: revealed {}, refilled {drawn}",
            self.id,
            revealed.code()
        );
        events.push(Event::PlotRevealed {
            code: revealed.code().to_string(),
            drawn,
        });
        Ok(())
    }
}
