use crate::errors::TrackerError;
use crate::position::{assign_positions, Position};
use crate::seat::{dealer_index, occupied_count, seat_with_position, Seat, MAX_SEATS};
use crate::stage::Stage;
use tracing::debug;

/// Seats plus the turn bookkeeping of the hand in progress.
/// Single source of truth for whose turn it is.
#[derive(Debug, Clone)]
pub struct TableState {
    seats: Vec<Seat>,
    stage: Stage,
    /// Seat due to act
    actor: usize,
    /// `None` until someone opens betting in the current round
    last_aggressor: Option<usize>,
    /// Starts at 1
    hand: u32,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self {
            seats: vec![Seat::default(); MAX_SEATS],
            stage: Stage::FIRST,
            actor: 0,
            last_aggressor: None,
            hand: 1,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, index: usize) -> Result<&Seat, TrackerError> {
        self.seats
            .get(index)
            .ok_or(TrackerError::SeatOutOfRange { seat: index })
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn actor(&self) -> usize {
        self.actor
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }
    pub fn hand_number(&self) -> u32 {
        self.hand
    }
    pub fn dealer(&self) -> Option<usize> {
        dealer_index(&self.seats)
    }
    pub fn occupied(&self) -> usize {
        occupied_count(&self.seats)
    }
    pub fn big_blind(&self) -> Option<usize> {
        seat_with_position(&self.seats, Position::BigBlind)
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }
    pub(crate) fn set_actor(&mut self, seat: usize) {
        self.actor = seat;
    }
    pub(crate) fn set_last_aggressor(&mut self, seat: Option<usize>) {
        self.last_aggressor = seat;
    }
    pub(crate) fn next_hand_number(&mut self) {
        self.hand += 1;
    }

    pub(crate) fn set_name(&mut self, index: usize, name: &str) -> Result<(), TrackerError> {
        self.seats
            .get_mut(index)
            .ok_or(TrackerError::SeatOutOfRange { seat: index })?
            .set_name(name);
        Ok(())
    }

    pub(crate) fn fold(&mut self, index: usize) {
        if let Some(seat) = self.seats.get_mut(index) {
            seat.set_folded(true);
        }
    }

    /// Makes `dealer` the button, relabels every occupied seat and brings all
    /// folded seats back into the hand.
    pub(crate) fn set_dealer(&mut self, dealer: usize) -> Result<(), TrackerError> {
        let mut seats = assign_positions(&self.seats, dealer)?;
        for seat in &mut seats {
            seat.set_folded(false);
        }
        self.seats = seats;
        Ok(())
    }

    /// Recomputes positions around the current dealer.
    pub(crate) fn sync_positions(&mut self) -> Result<(), TrackerError> {
        let dealer = self.dealer().ok_or(TrackerError::NoDealer)?;
        self.set_dealer(dealer)
    }

    /// Moves the button to the next occupied seat, wrapping around.
    pub(crate) fn rotate_button(&mut self) -> Result<usize, TrackerError> {
        let current = self.dealer().ok_or(TrackerError::NoDealer)?;
        let next = (1..=MAX_SEATS)
            .map(|step| (current + step) % MAX_SEATS)
            .find(|&i| self.seats[i].is_occupied())
            .ok_or(TrackerError::NoPlayers)?;
        debug!(from = current, to = next, "dealer button moved");
        self.set_dealer(next)?;
        Ok(next)
    }
}
