use crate::{Button, CardRef, Phase, PlayedCard, PlayerState};
use serde::Serialize;

/// Placeholder standing in for a card the viewer may not see.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct HiddenCard {}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HandSlot {
    Known(CardRef),
    Hidden(HiddenCard),
}

/// Owned snapshot of a player as seen by one viewer. Nothing in it aliases
/// the live engine state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: String,
    pub faction: Option<String>,
    pub agenda: Option<String>,
    pub num_draw_cards: usize,
    pub hand: Vec<HandSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_title: Option<String>,
    pub gold: i64,
    pub total_power: i64,
    pub reserve: i64,
    pub claim: i64,
    pub power: i64,
    pub phase: Phase,
    pub cards_in_play: Vec<PlayedCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_deck: Option<Vec<CardRef>>,
    pub num_plot_cards: usize,
    pub plot_selected: bool,
    pub first_player: bool,
    pub plot_discard: Vec<CardRef>,
}

impl PlayerState {
    /// Projects the state for a viewer. Opponents and spectators see hand
    /// size but not contents, no prompt, no plot deck, and no gold while
    /// setup is underway.
    pub fn view(&self, viewer_is_owner: bool) -> PlayerView {
        let hand = self
            .hand()
            .cards()
            .iter()
            .map(|card| {
                if viewer_is_owner {
                    HandSlot::Known(card.clone())
                } else {
                    HandSlot::Hidden(HiddenCard {})
                }
            })
            .collect();
        let gold = if !viewer_is_owner && self.phase == Phase::Setup {
            0
        } else {
            self.resources.gold
        };

        PlayerView {
            id: self.id.clone(),
            faction: self.faction.clone(),
            agenda: self.agenda.clone(),
            num_draw_cards: self.draw_deck().len(),
            hand,
            buttons: viewer_is_owner.then(|| self.prompt.buttons.clone()),
            menu_title: viewer_is_owner.then(|| self.prompt.menu_title.clone()),
            gold,
            total_power: self.resources.total_power,
            reserve: self.resources.reserve,
            claim: self.resources.claim,
            power: self.resources.power,
            phase: self.phase,
            cards_in_play: self.cards_in_play().to_vec(),
            plot_deck: viewer_is_owner.then(|| self.plot_deck().to_vec()),
            num_plot_cards: self.plot_deck().len(),
            plot_selected: self.selected_plot().is_some(),
            first_player: self.first_player,
            plot_discard: self.plot_discard().to_vec(),
        }
    }
}
