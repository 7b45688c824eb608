//! Per-player state engine for a two-player plot-driven card game. Keep this
//! crate free of IO and platform concerns.

pub mod cards;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod events;
pub mod player;
pub mod plot;
pub mod rng;
pub mod rules;
pub mod state;
pub mod view;

pub use cards::*;
pub use catalog::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use player::*;
pub use plot::*;
pub use rng::*;
pub use rules::{is_duplicate_in_play, is_limited, PlayRejection};
pub use state::*;
pub use view::*;
