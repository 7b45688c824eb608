use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulesConfig {
    #[serde(default = "default_hand_size")]
    pub starting_hand_size: usize,
    #[serde(default = "default_setup_gold")]
    pub setup_gold: i64,
    #[serde(default = "default_draw_phase_cards")]
    pub draw_phase_cards: usize,
    /// Rules-text marker identifying the once-per-round trait.
    #[serde(default = "default_limited_marker")]
    pub limited_marker: String,
}

fn default_hand_size() -> usize {
    7
}

fn default_setup_gold() -> i64 {
    8
}

fn default_draw_phase_cards() -> usize {
    2
}

fn default_limited_marker() -> String {
    "Limited.".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: default_hand_size(),
            setup_gold: default_setup_gold(),
            draw_phase_cards: default_draw_phase_cards(),
            limited_marker: default_limited_marker(),
        }
    }
}
