//! Read-only view of a tracker for display and JSON output.

use crate::position::Position;
use crate::stage::Stage;
use crate::stats::DerivedStats;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatSnapshot {
    pub seat: usize,
    pub name: String,
    pub position: Option<Position>,
    pub dealer: bool,
    pub folded: bool,
    pub stats: DerivedStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub started: bool,
    pub hand: u32,
    pub stage: Stage,
    pub actor: Option<usize>,
    pub actor_name: Option<String>,
    pub actor_position: Option<Position>,
    pub focus: Option<usize>,
    pub dealer: Option<usize>,
    pub last_aggressor: Option<usize>,
    /// Occupied seats only, in table order
    pub seats: Vec<SeatSnapshot>,
}
