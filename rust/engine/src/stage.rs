use serde::{Deserialize, Serialize};
use std::fmt;

/// Betting round of a hand. Progresses strictly forward within a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Stage {
    pub const FIRST: Stage = Stage::Preflop;

    /// The following round, or `None` after the river.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Preflop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Preflop => "Preflop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
