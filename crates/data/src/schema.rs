use serde::{Deserialize, Serialize};

pub use plotline_core::{CardDef, CardType, RulesConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckListEntry {
    #[serde(alias = "card")]
    pub code: String,
    pub count: i64,
}

/// Deck list as stored on disk: card codes, resolved later through a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckList {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub draw_cards: Vec<DeckListEntry>,
    #[serde(default)]
    pub plot_cards: Vec<DeckListEntry>,
}
