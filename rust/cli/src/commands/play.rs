//! # Play Command
//!
//! Interactive tracking of one live table.
//!
//! The table is seated from `--players`/`--dealer` (or the configuration),
//! then session commands are read line by line. Game actions are applied to
//! the seat due to act; after each one the stage banner, the next actor and
//! their statistics are printed.
//!
//! ## Features
//!
//! - Table setup from flags or interactively (`name`, `dealer`, `start`)
//! - Input validation with clear error messages; a rejected command leaves
//!   the table unchanged and the session continues
//! - Graceful quit handling (`q`, `quit` or end of input)
//! - JSON snapshot and hand history on demand

use crate::error::CliError;
use crate::formatters::{
    format_all_stats, format_hand, format_stats, format_table, format_turn,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, SessionCommand, parse_session_command};
use pokertrack_engine::engine::Tracker;
use pokertrack_engine::errors::TrackerError;
use pokertrack_engine::stats::HandCounting;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
Setup:   name <seat> <name> | dealer <seat> | start
Actions: check (x) | bet/raise (b, r) | call (c) | fold (f)
Hand:    next (start the next hand)
Stats:   stats | reset [seat]
View:    status | left (<) | right (>) | json | history
Other:   help | quit (q)";

/// Table setup for a play session.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Names in seat order; blank entries leave the seat free
    pub players: Vec<String>,
    pub dealer: Option<usize>,
    /// Start the game before reading any input
    pub start: bool,
    pub counting: HandCounting,
}

/// Handle the play command: interactive table tracking
///
/// # Returns
///
/// * `Ok(())` when the session ends via quit or end of input
/// * `Err(CliError)` if the initial setup is rejected or an I/O error occurs
///
/// # Examples
///
/// ```
/// use pokertrack_cli::commands::{handle_play_command, PlayOptions};
/// use std::io::Cursor;
///
/// let opts = PlayOptions {
///     players: vec!["Ann".into(), "Bob".into(), "Cat".into()],
///     dealer: Some(0),
///     start: true,
///     ..PlayOptions::default()
/// };
/// let mut input = Cursor::new("fold\nfold\nquit\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// handle_play_command(&opts, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Hand #2"));
/// ```
pub fn handle_play_command(
    opts: &PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut tracker = match set_up_table(opts) {
        Ok(tracker) => tracker,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Engine(e));
        }
    };

    writeln!(
        out,
        "play: players={} hand_counting={}",
        tracker.table().occupied(),
        tracker.counting().as_str()
    )?;
    if tracker.is_started() {
        writeln!(out, "{}", format_table(&tracker))?;
        writeln!(out, "{}", format_turn(&tracker))?;
    } else {
        writeln!(out, "Type 'help' for commands.")?;
    }

    while let Some(line) = read_stdin_line(stdin) {
        if line.is_empty() {
            continue;
        }
        let outcome = match parse_session_command(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => Err(CliError::InvalidInput(msg)),
            ParseResult::Command(cmd) => {
                debug!(command = ?cmd, "session command");
                execute(&mut tracker, cmd, out)
            }
        };
        // rejected lines are reported and the session carries on
        match outcome {
            Ok(()) => {}
            Err(CliError::InvalidInput(msg)) => ui::write_error(err, &msg)?,
            Err(CliError::Engine(e)) => ui::write_error(err, &e.to_string())?,
            Err(other) => return Err(other),
        }
    }

    info!(
        hand = tracker.hand_number(),
        completed = tracker.history().completed().len(),
        "session ended"
    );
    writeln!(
        out,
        "Session ended at hand #{} ({} completed)",
        tracker.hand_number(),
        tracker.history().completed().len()
    )?;
    Ok(())
}

fn set_up_table(opts: &PlayOptions) -> Result<Tracker, TrackerError> {
    let mut tracker = Tracker::new(opts.counting);
    for (seat, name) in opts.players.iter().enumerate() {
        if !name.trim().is_empty() {
            tracker.set_player_name(seat, name)?;
        }
    }
    if let Some(dealer) = opts.dealer {
        tracker.set_dealer(dealer)?;
    }
    if opts.start {
        tracker.start_game()?;
    }
    Ok(tracker)
}

fn execute(
    tracker: &mut Tracker,
    cmd: SessionCommand,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        SessionCommand::Name { seat, name } => {
            tracker.set_player_name(seat, &name)?;
            if name.is_empty() {
                writeln!(out, "Seat {} is now free", seat)?;
            } else {
                writeln!(out, "Seat {}: {}", seat, name.trim())?;
            }
        }
        SessionCommand::Dealer(seat) => {
            tracker.set_dealer(seat)?;
            writeln!(out, "{}", format_table(tracker))?;
        }
        SessionCommand::Start => {
            tracker.start_game()?;
            writeln!(out, "{}", format_table(tracker))?;
            writeln!(out, "{}", format_turn(tracker))?;
        }
        SessionCommand::Act(action) => {
            let hand = tracker.hand_number();
            let actor = tracker.actor();
            tracker.record_action(action)?;
            if let Some(seat) = actor {
                writeln!(out, "Seat {} {}", seat, action)?;
            }
            announce_new_hand(tracker, hand, out)?;
            writeln!(out, "{}", format_turn(tracker))?;
        }
        SessionCommand::NextHand => {
            let hand = tracker.hand_number();
            tracker.start_new_hand()?;
            announce_new_hand(tracker, hand, out)?;
            writeln!(out, "{}", format_turn(tracker))?;
        }
        SessionCommand::Reset(seat) => {
            let seat = match seat {
                Some(seat) => seat,
                None => tracker.focus().ok_or(TrackerError::GameNotStarted)?,
            };
            tracker.reset_stats(seat)?;
            writeln!(out, "Statistics reset for seat {}", seat)?;
        }
        SessionCommand::Step(direction) => {
            let focus = tracker.step_focus(direction)?;
            let seat = &tracker.seats()[focus];
            writeln!(
                out,
                "Seat {} {}: {}",
                focus,
                seat.name(),
                format_stats(&tracker.derived_stats(focus))
            )?;
        }
        SessionCommand::Status => {
            writeln!(out, "{}", format_table(tracker))?;
            writeln!(out, "{}", format_turn(tracker))?;
        }
        SessionCommand::Stats => {
            if !tracker.is_started() {
                return Err(TrackerError::GameNotStarted.into());
            }
            writeln!(out, "{}", format_all_stats(tracker))?;
        }
        SessionCommand::Json => {
            let json = serde_json::to_string_pretty(&tracker.snapshot())
                .map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        SessionCommand::History => {
            let history = tracker.history();
            if history.completed().is_empty() && history.current().is_none() {
                writeln!(out, "No hands recorded")?;
            }
            for hand in history.completed().iter().chain(history.current()) {
                writeln!(out, "{}", format_hand(hand))?;
            }
        }
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
    }
    Ok(())
}

fn announce_new_hand(
    tracker: &Tracker,
    previous: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if tracker.hand_number() != previous {
        let dealer = tracker
            .table()
            .dealer()
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        writeln!(
            out,
            "Hand #{} complete. Dealer moves to seat {}",
            previous, dealer
        )?;
    }
    Ok(())
}
