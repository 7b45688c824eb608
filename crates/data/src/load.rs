use crate::schema::{CardDef, DeckList, DeckListEntry, RulesConfig};
use anyhow::{bail, Context};
use plotline_core::{CardCatalog, Catalog, DeckDefinition, DeckEntry};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const CARDS_FILE: &str = "cards.json";
const RULES_FILE: &str = "rules.json";

pub fn load_rules_config(dir: &Path) -> anyhow::Result<RulesConfig> {
    let path = dir.join(RULES_FILE);
    if !path.exists() {
        return Ok(RulesConfig::default());
    }
    load_json(path)
}

pub fn load_catalog(dir: &Path, rules: &RulesConfig) -> anyhow::Result<Catalog> {
    let path = dir.join(CARDS_FILE);
    let defs: Vec<CardDef> = load_json(&path)?;
    let mut catalog = Catalog::new();
    for def in defs {
        if catalog.resolve(&def.code).is_some() {
            bail!("duplicate card code {} in {}", def.code, path.display());
        }
        catalog.insert(def, rules);
    }
    Ok(catalog)
}

pub fn load_deck_list(path: &Path) -> anyhow::Result<DeckList> {
    load_json(path)
}

/// Resolves every code in the list. Counts are passed through untouched so
/// the engine decides what a valid count is.
pub fn resolve_deck(list: &DeckList, catalog: &impl CardCatalog) -> anyhow::Result<DeckDefinition> {
    Ok(DeckDefinition {
        faction: list.faction.clone(),
        agenda: list.agenda.clone(),
        draw_cards: resolve_entries(&list.draw_cards, catalog).context("draw cards")?,
        plot_cards: resolve_entries(&list.plot_cards, catalog).context("plot cards")?,
    })
}

pub fn load_deck(path: &Path, catalog: &impl CardCatalog) -> anyhow::Result<DeckDefinition> {
    let list = load_deck_list(path)?;
    resolve_deck(&list, catalog).with_context(|| format!("resolve {}", path.display()))
}

fn resolve_entries(
    entries: &[DeckListEntry],
    catalog: &impl CardCatalog,
) -> anyhow::Result<Vec<DeckEntry>> {
    entries
        .iter()
        .map(|entry| {
            let Some(card) = catalog.resolve(&entry.code) else {
                bail!("unknown card code {}", entry.code);
            };
            Ok(DeckEntry::new(card, entry.count))
        })
        .collect()
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
