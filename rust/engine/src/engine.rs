use crate::errors::{ErrorKind, TrackerError};
use crate::game::TableState;
use crate::history::{ActionRecord, HandEnding, HandHistory};
use crate::seat::{active_count, Action, Seat};
use crate::snapshot::{SeatSnapshot, TableSnapshot};
use crate::stage::Stage;
use crate::stats::{DerivedStats, HandCounting, PlayerStat, StatisticsTable};
use crate::turn::{
    big_blind_closes, first_to_act, is_closing_actor, next_actor, step_occupied, Direction,
};
use tracing::{debug, error, info, warn};

/// Turn and stage state machine for one table.
///
/// Owns the table, the per-seat statistics and the hand history, and keeps
/// them consistent: every mutating call either applies completely or leaves
/// all three untouched.
///
/// # Examples
///
/// ```
/// use pokertrack_engine::engine::Tracker;
/// use pokertrack_engine::seat::Action;
/// use pokertrack_engine::stage::Stage;
///
/// let mut tracker = Tracker::default();
/// for (seat, name) in ["Ann", "Bob", "Cat", "Dan"].iter().enumerate() {
///     tracker.set_player_name(seat, name).unwrap();
/// }
/// tracker.set_dealer(0).unwrap();
/// tracker.start_game().unwrap();
///
/// // UTG opens preflop
/// assert_eq!(tracker.actor(), Some(3));
/// tracker.record_action(Action::Call).unwrap();
/// assert_eq!(tracker.stage(), Stage::Preflop);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    table: TableState,
    stats: StatisticsTable,
    history: HandHistory,
    started: bool,
    /// Seat shown to the user; equals the actor unless browsed away
    focus: usize,
}

fn rejected(err: TrackerError) -> TrackerError {
    match err.kind() {
        ErrorKind::Validation => warn!(error = %err, "request rejected"),
        ErrorKind::InvariantViolation => error!(error = %err, "turn bookkeeping failed"),
    }
    err
}

impl Tracker {
    pub fn new(counting: HandCounting) -> Self {
        Self {
            stats: StatisticsTable::new(counting),
            ..Self::default()
        }
    }

    /// Runs `op` against a copy and commits only on success.
    ///
    /// Completed hands are set aside while `op` runs; operations only append
    /// to them.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut Tracker) -> Result<T, TrackerError>,
    ) -> Result<T, TrackerError> {
        let earlier = self.history.take_completed();
        let mut working = self.clone();
        match op(&mut working) {
            Ok(value) => {
                working.history.restore_completed(earlier);
                *self = working;
                Ok(value)
            }
            Err(err) => {
                self.history.restore_completed(earlier);
                Err(rejected(err))
            }
        }
    }

    fn ensure_started(&self) -> Result<(), TrackerError> {
        if self.started {
            Ok(())
        } else {
            Err(TrackerError::GameNotStarted)
        }
    }

    fn occupied_seat(&self, seat: usize) -> Result<&Seat, TrackerError> {
        let s = self.table.seat(seat)?;
        if s.is_occupied() {
            Ok(s)
        } else {
            Err(TrackerError::SeatUnoccupied { seat })
        }
    }

    /// Names the player at `seat`; an empty name frees the seat.
    /// Once the game has started a seat can be renamed but not emptied or
    /// filled.
    pub fn set_player_name(&mut self, seat: usize, name: &str) -> Result<(), TrackerError> {
        self.transact(|t| {
            let was_occupied = t.table.seat(seat)?.is_occupied();
            let occupies = !name.trim().is_empty();
            if t.started && was_occupied != occupies {
                return Err(TrackerError::SeatsLocked { seat });
            }
            t.table.set_name(seat, name)
        })
    }

    /// Chooses the dealer before the game starts and labels every seat.
    pub fn set_dealer(&mut self, seat: usize) -> Result<(), TrackerError> {
        self.transact(|t| {
            if t.started {
                return Err(TrackerError::GameAlreadyStarted);
            }
            if t.table.occupied() == 0 {
                return Err(TrackerError::NoPlayers);
            }
            t.occupied_seat(seat)?;
            t.table.set_dealer(seat)
        })
    }

    /// Starts hand 1: labels seats around the chosen dealer, opens fresh
    /// statistics for every player and hands the turn to the preflop opener.
    pub fn start_game(&mut self) -> Result<(), TrackerError> {
        self.transact(|t| {
            if t.started {
                return Err(TrackerError::GameAlreadyStarted);
            }
            if t.table.occupied() == 0 {
                return Err(TrackerError::NoPlayers);
            }
            t.table.sync_positions()?;
            t.stats.initialize(t.table.seats());
            t.started = true;
            t.open_hand()?;
            info!(
                players = t.table.occupied(),
                dealer = ?t.table.dealer(),
                "game started"
            );
            Ok(())
        })
    }

    /// Records `action` for the seat due to act, then moves the turn on.
    pub fn record_action(&mut self, action: Action) -> Result<(), TrackerError> {
        self.transact(|t| {
            t.ensure_started()?;
            t.apply_action(action)
        })
    }

    /// Abandons the current hand and deals the next one.
    pub fn start_new_hand(&mut self) -> Result<(), TrackerError> {
        self.transact(|t| {
            t.ensure_started()?;
            t.roll_over(HandEnding::Manual)
        })
    }

    /// Zeroes the statistics of `seat`, keeping its current position label.
    pub fn reset_stats(&mut self, seat: usize) -> Result<(), TrackerError> {
        self.transact(|t| {
            t.ensure_started()?;
            let position = t.occupied_seat(seat)?.position();
            t.stats.reset(seat, position);
            Ok(())
        })
    }

    /// Moves the displayed seat to the neighbouring occupied seat. Turn order,
    /// stage, aggressor and statistics are left alone.
    pub fn step_focus(&mut self, direction: Direction) -> Result<usize, TrackerError> {
        self.transact(|t| {
            t.ensure_started()?;
            let focus = step_occupied(t.focus, direction, t.table.seats())
                .ok_or(TrackerError::NoPlayers)?;
            t.focus = focus;
            Ok(focus)
        })
    }

    fn apply_action(&mut self, action: Action) -> Result<(), TrackerError> {
        let actor = self.table.actor();
        let stage = self.table.stage();
        let hand = self.table.hand_number();
        let seat = self.table.seat(actor)?;
        let position = seat.position();
        let name = seat.name().to_string();

        self.stats.record(actor, action, stage, position, hand);
        self.history.record(ActionRecord {
            seat: actor,
            name,
            position,
            stage,
            action,
        });
        debug!(seat = actor, %action, %stage, hand, "action recorded");

        match action {
            Action::BetRaise => self.table.set_last_aggressor(Some(actor)),
            Action::Fold => {
                self.table.fold(actor);
                let seats = self.table.seats();
                if active_count(seats) <= 1 {
                    return self.roll_over(HandEnding::OneLeft);
                }
                if is_closing_actor(actor, self.table.last_aggressor(), stage, seats) {
                    return self.roll_over(HandEnding::ClosingActorFolded);
                }
            }
            Action::Check | Action::Call => {}
        }

        self.advance(action == Action::Fold)
    }

    fn advance(&mut self, folded: bool) -> Result<(), TrackerError> {
        let current = self.table.actor();
        let stage = self.table.stage();
        let aggressor = self.table.last_aggressor();
        let seats = self.table.seats();
        let next = next_actor(current, seats)?;

        let closing_seat = if big_blind_closes(aggressor, stage, seats) {
            current
        } else {
            next
        };
        if !folded && is_closing_actor(closing_seat, aggressor, stage, seats) {
            return self.advance_stage();
        }

        self.table.set_actor(next);
        self.focus = next;
        Ok(())
    }

    fn advance_stage(&mut self) -> Result<(), TrackerError> {
        self.table.set_last_aggressor(None);
        match self.table.stage().next() {
            Some(stage) => {
                let first = first_to_act(stage, self.table.seats())?;
                self.table.set_stage(stage);
                self.table.set_actor(first);
                self.focus = first;
                debug!(%stage, actor = first, "stage advanced");
                Ok(())
            }
            None => self.roll_over(HandEnding::RiverComplete),
        }
    }

    fn roll_over(&mut self, ending: HandEnding) -> Result<(), TrackerError> {
        self.history.finish(ending);
        self.table.next_hand_number();
        self.table.rotate_button()?;
        self.open_hand()?;
        info!(hand = self.table.hand_number(), ?ending, "new hand");
        Ok(())
    }

    /// Preflop, big blind as aggressor, opener to act.
    fn open_hand(&mut self) -> Result<(), TrackerError> {
        let first = first_to_act(Stage::FIRST, self.table.seats())?;
        self.table.set_stage(Stage::FIRST);
        self.table.set_last_aggressor(self.table.big_blind());
        self.table.set_actor(first);
        self.focus = first;
        let dealer = self.table.dealer().ok_or(TrackerError::NoDealer)?;
        self.history.begin(self.table.hand_number(), dealer);
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
    pub fn table(&self) -> &TableState {
        &self.table
    }
    pub fn seats(&self) -> &[Seat] {
        self.table.seats()
    }
    pub fn stage(&self) -> Stage {
        self.table.stage()
    }
    pub fn hand_number(&self) -> u32 {
        self.table.hand_number()
    }
    pub fn counting(&self) -> HandCounting {
        self.stats.counting()
    }
    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Seat due to act, once the game has started.
    pub fn actor(&self) -> Option<usize> {
        self.started.then(|| self.table.actor())
    }

    /// Seat currently displayed, once the game has started.
    pub fn focus(&self) -> Option<usize> {
        self.started.then_some(self.focus)
    }

    pub fn player_stat(&self, seat: usize) -> Option<&PlayerStat> {
        self.stats.get(seat)
    }

    pub fn derived_stats(&self, seat: usize) -> DerivedStats {
        self.stats.derived(seat)
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let actor = self.actor().and_then(|i| self.table.seat(i).ok());
        TableSnapshot {
            started: self.started,
            hand: self.table.hand_number(),
            stage: self.table.stage(),
            actor: self.actor(),
            actor_name: actor.map(|s| s.name().to_string()),
            actor_position: actor.and_then(Seat::position),
            focus: self.focus(),
            dealer: self.table.dealer(),
            last_aggressor: self.table.last_aggressor(),
            seats: self
                .table
                .seats()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_occupied())
                .map(|(i, s)| SeatSnapshot {
                    seat: i,
                    name: s.name().to_string(),
                    position: s.position(),
                    dealer: s.is_dealer(),
                    folded: s.is_folded(),
                    stats: self.stats.derived(i),
                })
                .collect(),
        }
    }
}
