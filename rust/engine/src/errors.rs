use thiserror::Error;

/// Broad category of a [`TrackerError`].
///
/// Validation errors are meant to be shown to the user as-is; invariant
/// violations indicate a bug in the turn bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InvariantViolation,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Please enter at least one player name to start the game.")]
    NoPlayers,
    #[error("Please choose a dealer before starting the game.")]
    NoDealer,
    #[error("Seat {seat} does not exist (seats are 0-9)")]
    SeatOutOfRange { seat: usize },
    #[error("Seat {seat} has no player")]
    SeatUnoccupied { seat: usize },
    #[error("Seat {seat} cannot join or leave once the game has started")]
    SeatsLocked { seat: usize },
    #[error("The game has not started")]
    GameNotStarted,
    #[error("The game has already started")]
    GameAlreadyStarted,
    #[error("No active players left to act")]
    NoActivePlayers,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::NoActivePlayers => ErrorKind::InvariantViolation,
            _ => ErrorKind::Validation,
        }
    }
}
