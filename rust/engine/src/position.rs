//! Named table positions relative to the dealer button.
//!
//! Positions are derived from the dealer seat and the number of occupied
//! seats every time the button moves; they are never patched incrementally.

use crate::errors::TrackerError;
use crate::seat::{occupied_count, Seat};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "UTG+1")]
    UnderTheGun1,
    #[serde(rename = "UTG+2")]
    UnderTheGun2,
    #[serde(rename = "EP")]
    Early,
    #[serde(rename = "LJ")]
    Lojack,
    #[serde(rename = "HJ")]
    Hijack,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "BTN")]
    Button,
}

/// Fallback labels, indexed by raw seat distance from the dealer minus one.
pub const POSITIONS: [Position; 10] = [
    Position::SmallBlind,
    Position::BigBlind,
    Position::UnderTheGun,
    Position::UnderTheGun1,
    Position::UnderTheGun2,
    Position::Early,
    Position::Lojack,
    Position::Hijack,
    Position::Cutoff,
    Position::Button,
];

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
            Position::UnderTheGun => "UTG",
            Position::UnderTheGun1 => "UTG+1",
            Position::UnderTheGun2 => "UTG+2",
            Position::Early => "EP",
            Position::Lojack => "LJ",
            Position::Hijack => "HJ",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
        }
    }

    /// Small and big blind post forced bets, so they never get a
    /// raise-first-in opportunity.
    pub fn is_blind(&self) -> bool {
        matches!(self, Position::SmallBlind | Position::BigBlind)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for the seat at `index` given the dealer seat and the number of
/// occupied seats.
///
/// Offsets are taken on raw seat numbers modulo `occupied`, which matches a
/// circular walk over occupied seats only when seats `0..occupied` are the
/// occupied ones. Sparse seating yields skewed labels; that arithmetic is kept
/// as is.
pub fn position_for(index: usize, dealer: usize, occupied: usize) -> Position {
    if index == dealer {
        return Position::Button;
    }
    let n = occupied;
    if n > 2 {
        if index == (dealer + 1) % n {
            return Position::SmallBlind;
        }
        if index == (dealer + 2) % n {
            return Position::BigBlind;
        }
        if index == (dealer + 3) % n {
            return Position::UnderTheGun;
        }
        if n > 4 {
            if index == (dealer + n - 1) % n {
                return Position::Cutoff;
            }
            if index == (dealer + n - 2) % n {
                return Position::Hijack;
            }
            if index == (dealer + n - 3) % n {
                return Position::Lojack;
            }
        }
    }
    POSITIONS[(index + POSITIONS.len() * 2 - dealer - 1) % POSITIONS.len()]
}

/// Returns a copy of `seats` with `dealer` marked as the button and every
/// occupied seat labelled. Unoccupied seats are left without a position.
///
/// # Errors
///
/// [`TrackerError::NoPlayers`] when no seat is occupied.
///
/// # Examples
///
/// ```
/// use pokertrack_engine::position::{assign_positions, Position};
/// use pokertrack_engine::seat::Seat;
///
/// let seats = vec![Seat::new("A"), Seat::new("B"), Seat::new("C")];
/// let seats = assign_positions(&seats, 0).unwrap();
/// assert_eq!(seats[0].position(), Some(Position::Button));
/// assert_eq!(seats[1].position(), Some(Position::SmallBlind));
/// assert_eq!(seats[2].position(), Some(Position::BigBlind));
/// ```
pub fn assign_positions(seats: &[Seat], dealer: usize) -> Result<Vec<Seat>, TrackerError> {
    let occupied = occupied_count(seats);
    if occupied == 0 {
        return Err(TrackerError::NoPlayers);
    }
    Ok(seats
        .iter()
        .enumerate()
        .map(|(i, seat)| {
            let mut seat = seat.clone();
            seat.set_dealer(i == dealer);
            if seat.is_occupied() {
                seat.set_position(Some(position_for(i, dealer, occupied)));
            } else {
                seat.set_position(None);
            }
            seat
        })
        .collect())
}
