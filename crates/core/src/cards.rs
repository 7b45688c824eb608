use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Character,
    Location,
    Attachment,
    Event,
    Plot,
    Agenda,
    Title,
    #[serde(other)]
    Other,
}

/// Static attributes of a card as published by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDef {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: i64,
    #[serde(rename = "type_code")]
    pub card_type: CardType,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub faction_code: Option<String>,
    /// Set when the card enters a catalog. Legality also checks the text.
    #[serde(default)]
    pub limited: bool,
}

impl CardDef {
    pub fn new(code: impl Into<String>, card_type: CardType, cost: i64) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            cost,
            card_type,
            is_unique: false,
            text: String::new(),
            faction_code: None,
            limited: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        !marker.is_empty() && self.text.contains(marker)
    }
}

/// Shared, read-only handle to a catalog card. Two refs are equal when they
/// name the same card code.
#[derive(Clone)]
pub struct CardRef(Arc<CardDef>);

impl CardRef {
    pub fn new(def: CardDef) -> Self {
        Self(Arc::new(def))
    }

    pub fn code(&self) -> &str {
        &self.0.code
    }

    pub fn def(&self) -> &CardDef {
        &self.0
    }
}

impl Deref for CardRef {
    type Target = CardDef;

    fn deref(&self) -> &CardDef {
        &self.0
    }
}

impl PartialEq for CardRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.code == other.0.code
    }
}

impl Eq for CardRef {}

impl fmt::Debug for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardRef({})", self.0.code)
    }
}

impl From<CardDef> for CardRef {
    fn from(def: CardDef) -> Self {
        Self::new(def)
    }
}

impl Serialize for CardRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.def().serialize(serializer)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayedCard {
    pub card: CardRef,
    #[serde(rename = "facedown")]
    pub face_down: bool,
}

impl PlayedCard {
    pub fn face_down(card: CardRef) -> Self {
        Self {
            card,
            face_down: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refs_compare_by_code() {
        let a = CardRef::new(CardDef::new("01001", CardType::Character, 3));
        let b = CardRef::new(CardDef::new("01001", CardType::Character, 5));
        let c = CardRef::new(CardDef::new("01002", CardType::Character, 3));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn unknown_type_codes_map_to_other() {
        let def: CardDef =
            serde_json::from_str(r#"{"code":"x","type_code":"treachery"}"#).expect("parse");
        assert_eq!(def.card_type, CardType::Other);
        assert_eq!(def.cost, 0);
        assert!(!def.limited);
    }

    #[test]
    fn empty_marker_never_matches() {
        let def = CardDef::new("x", CardType::Location, 1).with_text("Limited.");
        assert!(def.has_marker("Limited."));
        assert!(!def.has_marker(""));
    }
}
