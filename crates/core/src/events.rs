use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    HandDealt { count: usize, mulligan: bool },
    HandKept,
    GameStarted { gold: i64 },
    CardPlayed {
        code: String,
        cost_paid: i64,
        duplicate: bool,
    },
    SetupDone,
    PlotPhaseStarted,
    /// Carries no code: the choice stays hidden until reveal.
    PlotSelected,
    PlotRevealed { code: String, drawn: usize },
    DrawPhaseStarted,
    CardsDrawn { count: usize },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
