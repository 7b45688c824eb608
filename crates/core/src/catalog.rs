use crate::{CardDef, CardRef, RulesConfig};
use std::collections::HashMap;

/// Read-only lookup from card code to catalog attributes.
pub trait CardCatalog {
    fn resolve(&self, code: &str) -> Option<CardRef>;
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: HashMap<String, CardRef>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defs(defs: impl IntoIterator<Item = CardDef>, rules: &RulesConfig) -> Self {
        let mut catalog = Self::new();
        for def in defs {
            catalog.insert(def, rules);
        }
        catalog
    }

    /// Adds or replaces a card, deriving its limited trait from the rules text.
    pub fn insert(&mut self, mut def: CardDef, rules: &RulesConfig) -> CardRef {
        def.limited = def.limited || def.has_marker(&rules.limited_marker);
        let card = CardRef::new(def);
        self.cards.insert(card.code().to_string(), card.clone());
        card
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardCatalog for Catalog {
    fn resolve(&self, code: &str) -> Option<CardRef> {
        self.cards.get(code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardType;

    #[test]
    fn limited_trait_resolved_on_insert() {
        let rules = RulesConfig::default();
        let catalog = Catalog::from_defs(
            [
                CardDef::new("a", CardType::Location, 1).with_text("Limited. Reduce by 1."),
                CardDef::new("b", CardType::Location, 1).with_text("Limited reduce."),
            ],
            &rules,
        );
        assert!(catalog.resolve("a").map(|card| card.limited).unwrap_or(false));
        assert!(!catalog.resolve("b").map(|card| card.limited).unwrap_or(true));
        assert!(catalog.resolve("c").is_none());
    }

    #[test]
    fn custom_marker_is_honoured() {
        let rules = RulesConfig {
            limited_marker: "Restricted.".to_string(),
            ..RulesConfig::default()
        };
        let mut catalog = Catalog::new();
        let card = catalog.insert(
            CardDef::new("r", CardType::Attachment, 0).with_text("Restricted."),
            &rules,
        );
        assert!(card.limited);
        assert_eq!(catalog.len(), 1);
    }
}
