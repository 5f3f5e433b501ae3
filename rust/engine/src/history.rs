use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::position::Position;
use crate::seat::Action;
use crate::stage::Stage;

/// How a hand came to an end.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandEnding {
    /// At most one player left in the hand
    OneLeft,
    /// The seat that would have closed the round folded
    ClosingActorFolded,
    /// River betting completed
    RiverComplete,
    /// New hand requested by the user
    Manual,
}

/// A single recorded action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub name: String,
    pub position: Option<Position>,
    pub stage: Stage,
    pub action: Action,
}

/// Everything recorded during one hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct HandRecord {
    pub hand: u32,
    pub dealer: usize,
    /// RFC3339, seconds precision
    pub started_at: String,
    pub actions: Vec<ActionRecord>,
    pub ending: Option<HandEnding>,
}

/// Session-only log of hands, kept in memory.
#[derive(Debug, Clone, Default)]
pub struct HandHistory {
    current: Option<HandRecord>,
    completed: Vec<HandRecord>,
}

impl HandHistory {
    pub fn current(&self) -> Option<&HandRecord> {
        self.current.as_ref()
    }

    pub fn completed(&self) -> &[HandRecord] {
        &self.completed
    }

    pub(crate) fn begin(&mut self, hand: u32, dealer: usize) {
        self.current = Some(HandRecord {
            hand,
            dealer,
            started_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            actions: Vec::new(),
            ending: None,
        });
    }

    pub(crate) fn record(&mut self, record: ActionRecord) {
        if let Some(hand) = &mut self.current {
            hand.actions.push(record);
        }
    }

    pub(crate) fn finish(&mut self, ending: HandEnding) {
        if let Some(mut hand) = self.current.take() {
            hand.ending = Some(ending);
            self.completed.push(hand);
        }
    }

    pub(crate) fn take_completed(&mut self) -> Vec<HandRecord> {
        std::mem::take(&mut self.completed)
    }

    /// Puts `earlier` back in front of any hands finished since it was taken.
    pub(crate) fn restore_completed(&mut self, mut earlier: Vec<HandRecord>) {
        earlier.append(&mut self.completed);
        self.completed = earlier;
    }
}
