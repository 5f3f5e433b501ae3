use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fixed slots at the table.
pub const MAX_SEATS: usize = 10;

/// A discrete action fed in by the user for the seat currently due to act.
/// No amounts are tracked, only who acted and how.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Check,
    /// Any bet or raise, including opening the pot
    BetRaise,
    Call,
    Fold,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Check => "Check",
            Action::BetRaise => "Bet/Raise",
            Action::Call => "Call",
            Action::Fold => "Fold",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One fixed slot at the table.
/// An empty name means nobody sits here for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    name: String,
    is_dealer: bool,
    /// Only meaningful while the seat is occupied
    position: Option<Position>,
    folded: bool,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_occupied(&self) -> bool {
        !self.name.is_empty()
    }
    /// Occupied and still in the current hand.
    pub fn is_active(&self) -> bool {
        self.is_occupied() && !self.folded
    }
    pub fn is_dealer(&self) -> bool {
        self.is_dealer
    }
    pub fn position(&self) -> Option<Position> {
        if self.is_occupied() {
            self.position
        } else {
            None
        }
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }
    pub(crate) fn set_dealer(&mut self, dealer: bool) {
        self.is_dealer = dealer;
    }
    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
    pub(crate) fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }
}

pub fn occupied_count(seats: &[Seat]) -> usize {
    seats.iter().filter(|s| s.is_occupied()).count()
}

pub fn active_count(seats: &[Seat]) -> usize {
    seats.iter().filter(|s| s.is_active()).count()
}

pub fn dealer_index(seats: &[Seat]) -> Option<usize> {
    seats.iter().position(|s| s.is_occupied() && s.is_dealer())
}

/// Index of the occupied seat labelled `position`, if any.
pub fn seat_with_position(seats: &[Seat], position: Position) -> Option<usize> {
    seats
        .iter()
        .position(|s| s.position() == Some(position))
}
