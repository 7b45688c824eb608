//! Card-play legality. Evaluated fresh on every query.

use crate::{CardRef, CardType, Hand, Phase, PlayedCard};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlayRejection {
    #[error("phase {0:?} does not allow plays")]
    Phase(Phase),
    #[error("card not in hand")]
    NotInHand,
    #[error("not enough gold")]
    NotEnoughGold,
    #[error("limited card already played this round")]
    LimitedPlayed,
    #[error("events cannot be played during setup")]
    SetupEvent,
    #[error("no character available to attach to")]
    NoAttachmentHost,
}

pub fn check_play(
    phase: Phase,
    hand: &Hand,
    cards_in_play: &[PlayedCard],
    gold: i64,
    limited_played: bool,
    limited_marker: &str,
    card: &CardRef,
) -> Result<(), PlayRejection> {
    if !phase.permits_card_play() {
        return Err(PlayRejection::Phase(phase));
    }
    if !hand.contains(card.code()) {
        return Err(PlayRejection::NotInHand);
    }
    if card.cost > gold && !is_duplicate_in_play(cards_in_play, card) {
        return Err(PlayRejection::NotEnoughGold);
    }
    if limited_played && is_limited(card, limited_marker) {
        return Err(PlayRejection::LimitedPlayed);
    }
    if phase == Phase::Setup {
        match card.card_type {
            CardType::Event => return Err(PlayRejection::SetupEvent),
            CardType::Attachment if !has_attachment_host(cards_in_play) => {
                return Err(PlayRejection::NoAttachmentHost)
            }
            _ => {}
        }
    }
    Ok(())
}

/// A unique card whose code is already on the battlefield.
pub fn is_duplicate_in_play(cards_in_play: &[PlayedCard], card: &CardRef) -> bool {
    card.is_unique && cards_in_play.iter().any(|played| played.card == *card)
}

/// Limited either by the flag resolved at catalog load or by the marker in
/// the rules text, so cards built outside a catalog are caught too.
pub fn is_limited(card: &CardRef, limited_marker: &str) -> bool {
    card.limited || card.has_marker(limited_marker)
}

/// Hosts are approximated by count: there must be more characters than
/// attachments already in play.
fn has_attachment_host(cards_in_play: &[PlayedCard]) -> bool {
    let count = |kind: CardType| {
        cards_in_play
            .iter()
            .filter(|played| played.card.card_type == kind)
            .count()
    };
    let attachments = count(CardType::Attachment);
    let characters = count(CardType::Character);
    !(attachments == 0 && characters == 0) && attachments < characters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardDef;

    fn in_play(code: &str, kind: CardType) -> PlayedCard {
        PlayedCard::face_down(CardRef::new(CardDef::new(code, kind, 0)))
    }

    #[test]
    fn attachment_host_counts() {
        assert!(!has_attachment_host(&[]));
        assert!(has_attachment_host(&[in_play("c", CardType::Character)]));
        assert!(!has_attachment_host(&[
            in_play("c", CardType::Character),
            in_play("a", CardType::Attachment),
        ]));
        assert!(has_attachment_host(&[
            in_play("c", CardType::Character),
            in_play("d", CardType::Character),
            in_play("a", CardType::Attachment),
        ]));
        assert!(!has_attachment_host(&[in_play("l", CardType::Location)]));
    }

    #[test]
    fn duplicate_requires_unique_and_same_code() {
        let unique = CardRef::new(CardDef::new("u", CardType::Character, 4).unique());
        let plain = CardRef::new(CardDef::new("n", CardType::Character, 4));
        let board = vec![
            PlayedCard::face_down(unique.clone()),
            PlayedCard::face_down(plain.clone()),
        ];
        assert!(is_duplicate_in_play(&board, &unique));
        assert!(!is_duplicate_in_play(&board, &plain));
        assert!(!is_duplicate_in_play(&[], &unique));
    }

    #[test]
    fn limited_from_flag_or_text() {
        let flagged = CardDef {
            limited: true,
            ..CardDef::new("f", CardType::Location, 0)
        };
        let text = CardDef::new("t", CardType::Location, 0).with_text("Limited. Gain 1 gold.");
        let plain = CardDef::new("p", CardType::Location, 0).with_text("Gain 1 gold.");
        assert!(is_limited(&CardRef::new(flagged), "Limited."));
        assert!(is_limited(&CardRef::new(text.clone()), "Limited."));
        assert!(!is_limited(&CardRef::new(text), "Restricted."));
        assert!(!is_limited(&CardRef::new(plain), "Limited."));
    }
}
