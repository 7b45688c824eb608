use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    None,
    Setup,
    Plot,
    Draw,
}

impl Phase {
    /// Only setup plays are governed by this engine.
    pub fn permits_card_play(self) -> bool {
        matches!(self, Phase::Setup)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub gold: i64,
    pub claim: i64,
    pub power: i64,
    pub total_power: i64,
    pub reserve: i64,
}

impl Resources {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Button {
    pub command: String,
    pub text: String,
}

impl Button {
    pub fn new(command: &str, text: &str) -> Self {
        Self {
            command: command.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    pub menu_title: String,
    pub buttons: Vec<Button>,
}

pub const KEEP_OR_MULLIGAN_TITLE: &str = "Keep Starting Hand?";
pub const WAITING_FOR_OPPONENT_TITLE: &str = "Waiting for opponent to keep hand or mulligan";
pub const SELECT_SETUP_TITLE: &str = "Select setup cards";
pub const CHOOSE_PLOT_TITLE: &str = "Choose your plot";

impl Prompt {
    pub fn set(&mut self, title: &str, buttons: Vec<Button>) {
        self.menu_title = title.to_string();
        self.buttons = buttons;
    }

    pub fn clear(&mut self) {
        self.menu_title.clear();
        self.buttons.clear();
    }

    pub fn keep_or_mulligan() -> Vec<Button> {
        vec![
            Button::new("keep", "Keep Hand"),
            Button::new("mulligan", "Mulligan"),
        ]
    }
}
