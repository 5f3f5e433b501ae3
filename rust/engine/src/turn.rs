//! Turn order: who opens a betting round, who acts next, and whose action
//! closes the round.
//!
//! All scans walk the seats circularly in table order and skip seats that
//! are unoccupied or folded.

use crate::errors::TrackerError;
use crate::position::Position;
use crate::seat::{dealer_index, seat_with_position, Seat};
use crate::stage::Stage;

/// First active seat strictly after `from`, wrapping around. `from` itself is
/// the last candidate examined.
fn first_active_after(seats: &[Seat], from: usize) -> Result<usize, TrackerError> {
    let len = seats.len();
    (1..=len)
        .map(|step| (from + step) % len)
        .find(|&i| seats[i].is_active())
        .ok_or(TrackerError::NoActivePlayers)
}

/// Seat that opens `stage`.
///
/// Preflop this is the active UTG seat. Short-handed or sparse tables may have
/// no UTG; the scan then starts after the UTG seat, the big blind, or the
/// dealer, whichever exists first. Later rounds open with the first active
/// seat after the dealer.
///
/// # Errors
///
/// [`TrackerError::NoActivePlayers`] when every seat is empty or folded.
pub fn first_to_act(stage: Stage, seats: &[Seat]) -> Result<usize, TrackerError> {
    let dealer = dealer_index(seats).unwrap_or(0);
    if stage != Stage::Preflop {
        return first_active_after(seats, dealer);
    }
    match seat_with_position(seats, Position::UnderTheGun) {
        Some(utg) if seats[utg].is_active() => Ok(utg),
        Some(utg) => first_active_after(seats, utg),
        None => {
            let anchor = seat_with_position(seats, Position::BigBlind).unwrap_or(dealer);
            first_active_after(seats, anchor)
        }
    }
}

/// Seat due to act after `current`.
///
/// # Errors
///
/// [`TrackerError::NoActivePlayers`] when no seat is eligible.
pub fn next_actor(current: usize, seats: &[Seat]) -> Result<usize, TrackerError> {
    first_active_after(seats, current)
}

/// Whether `seat` is the one whose action ends the round: the last aggressor,
/// or the opener of the round when nobody has bet.
pub fn is_closing_actor(
    seat: usize,
    last_aggressor: Option<usize>,
    stage: Stage,
    seats: &[Seat],
) -> bool {
    match last_aggressor {
        Some(aggressor) => seat == aggressor,
        None => first_to_act(stage, seats).is_ok_and(|first| first == seat),
    }
}

/// Preflop with the big blind as last aggressor means the pot is unraised;
/// the round then closes on the big blind's own action rather than when
/// control would pass back to it.
pub fn big_blind_closes(last_aggressor: Option<usize>, stage: Stage, seats: &[Seat]) -> bool {
    stage == Stage::Preflop
        && last_aggressor
            .and_then(|seat| seats.get(seat))
            .and_then(Seat::position)
            == Some(Position::BigBlind)
}

/// Direction for browsing seats without acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Neighbouring occupied seat of `from` in `direction`. Folded seats are not
/// skipped, only empty ones.
pub fn step_occupied(from: usize, direction: Direction, seats: &[Seat]) -> Option<usize> {
    let len = seats.len();
    (1..=len)
        .map(|step| match direction {
            Direction::Right => (from + step) % len,
            Direction::Left => (from + len * 2 - step) % len,
        })
        .find(|&i| seats[i].is_occupied())
}
