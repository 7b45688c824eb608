use crate::CardRef;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectedPlot {
    pub card: CardRef,
    #[serde(rename = "facedown")]
    pub face_down: bool,
}

/// Plot pool, the pending selection and the reveal history.
#[derive(Debug, Clone, Default)]
pub struct PlotDeck {
    deck: Vec<CardRef>,
    selected: Option<SelectedPlot>,
    discard: Vec<CardRef>,
}

impl PlotDeck {
    /// Plots are chosen, never drawn, so the pool is taken as-is.
    pub fn reset(&mut self, pool: &[CardRef]) {
        self.deck = pool.to_vec();
        self.selected = None;
        self.discard.clear();
    }

    pub fn select(&mut self, card: &CardRef) -> bool {
        let Some(found) = self.deck.iter().find(|plot| *plot == card) else {
            return false;
        };
        self.selected = Some(SelectedPlot {
            card: found.clone(),
            face_down: true,
        });
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Flips the selection face up, moves it to the discard pile and removes
    /// its code from the deck. Returns the revealed card.
    pub fn reveal(&mut self) -> Option<CardRef> {
        let mut selected = self.selected.take()?;
        selected.face_down = false;
        let card = selected.card;
        self.discard.push(card.clone());
        self.deck.retain(|plot| plot != &card);
        Some(card)
    }

    pub fn selected(&self) -> Option<&SelectedPlot> {
        self.selected.as_ref()
    }

    pub fn deck(&self) -> &[CardRef] {
        &self.deck
    }

    pub fn discard(&self) -> &[CardRef] {
        &self.discard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardDef, CardType};

    fn plot(code: &str) -> CardRef {
        CardRef::new(CardDef::new(code, CardType::Plot, 0))
    }

    #[test]
    fn selection_is_reversible_until_reveal() {
        let mut plots = PlotDeck::default();
        plots.reset(&[plot("a"), plot("b")]);
        assert!(plots.select(&plot("a")));
        assert!(plots.select(&plot("b")));
        assert_eq!(plots.deck().len(), 2);
        assert_eq!(plots.selected().map(|p| p.card.code()), Some("b"));
        assert!(plots.selected().map(|p| p.face_down).unwrap_or(false));
    }

    #[test]
    fn cannot_select_missing_plot() {
        let mut plots = PlotDeck::default();
        plots.reset(&[plot("a")]);
        assert!(!plots.select(&plot("z")));
        assert!(plots.selected().is_none());
    }

    #[test]
    fn reveal_moves_selection_to_discard() {
        let mut plots = PlotDeck::default();
        plots.reset(&[plot("a"), plot("b")]);
        assert!(plots.reveal().is_none());
        plots.select(&plot("a"));
        let revealed = plots.reveal().expect("revealed");
        assert_eq!(revealed.code(), "a");
        assert_eq!(plots.discard(), &[plot("a")]);
        assert_eq!(plots.deck(), &[plot("b")]);
        assert!(plots.selected().is_none());
    }
}
